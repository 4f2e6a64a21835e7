//! State behind the create/edit side form.

use tracing::debug;

use crate::record::{Hospital, HospitalId};

/// Editable values of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub name: String,
    pub address: String,
}

impl Fields {
    /// Both fields are required.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.address.is_empty()
    }
}

/// The in-progress draft. Editing always carries the id of the record being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Create(Fields),
    Edit { id: HospitalId, fields: Fields },
}

impl Default for Draft {
    fn default() -> Self {
        Draft::Create(Fields::default())
    }
}

/// The request a submit turns into, captured at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Carries [`HospitalId::UNASSIGNED`]; the server assigns the real id.
    Create(Hospital),
    Update { id: HospitalId, hospital: Hospital },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    draft: Draft,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn fields(&self) -> &Fields {
        match &self.draft {
            Draft::Create(fields) | Draft::Edit { fields, .. } => fields,
        }
    }

    fn fields_mut(&mut self) -> &mut Fields {
        match &mut self.draft {
            Draft::Create(fields) | Draft::Edit { fields, .. } => fields,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.draft, Draft::Edit { .. })
    }

    /// Id of the record under edit, if any.
    pub fn editing_id(&self) -> Option<HospitalId> {
        match self.draft {
            Draft::Edit { id, .. } => Some(id),
            Draft::Create(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.fields().is_valid()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields_mut().name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.fields_mut().address = address.into();
    }

    /// Load a [`Hospital`] for editing, discarding whatever was in the draft.
    pub fn select_for_edit(&mut self, hospital: &Hospital) {
        debug!("Editing hospital {}", hospital.id);

        self.draft = Draft::Edit {
            id: hospital.id,
            fields: Fields {
                name: hospital.name.clone(),
                address: hospital.address.clone(),
            },
        };
    }

    /// Reset to an empty create draft.
    pub fn reset(&mut self) {
        self.draft = Draft::default();
    }

    /// Build the API request for the current draft. The draft itself is left alone.
    pub fn submission(&self) -> Submission {
        match &self.draft {
            Draft::Create(fields) => Submission::Create(Hospital {
                id: HospitalId::UNASSIGNED,
                name: fields.name.clone(),
                address: fields.address.clone(),
            }),
            Draft::Edit { id, fields } => Submission::Update {
                id: *id,
                hospital: Hospital {
                    id: *id,
                    name: fields.name.clone(),
                    address: fields.address.clone(),
                },
            },
        }
    }
}
