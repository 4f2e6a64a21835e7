//! The hospitals screen: one [`RecordStore`], one [`FormController`] and the API they sync with.
//!
//! Requests are built from a snapshot of the current state and run elsewhere (an `iced` task, a
//! tokio runtime). When one completes, its [`Outcome`] is handed back to [`Screen::apply`], which
//! patches the store. Nothing changes while a request is in flight, and outcomes are applied in
//! the order they arrive, which need not be the order the requests were issued in.

use std::future::Future;

use tracing::{error, info};

use crate::{
    api::{ApiError, ApiResult, HospitalApi},
    form::{FormController, Submission},
    record::{Hospital, HospitalId},
    store::RecordStore,
};

/// Result of a completed API request.
#[derive(Debug, Clone)]
pub enum Outcome {
    Loaded(ApiResult<Vec<Hospital>>),
    Created(ApiResult<Hospital>),
    Updated(ApiResult<Hospital>),
    Deleted(HospitalId, ApiResult<()>),
}

#[derive(Debug)]
pub struct Screen<A> {
    api: A,
    store: RecordStore,
    form: FormController,
}

impl<A: HospitalApi> Screen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: RecordStore::new(),
            form: FormController::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Field edits go straight to the draft.
    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn select_for_edit(&mut self, hospital: &Hospital) {
        self.form.select_for_edit(hospital);
    }

    /// Fetch every hospital.
    pub fn load(&self) -> impl Future<Output = Outcome> + Send + use<A> {
        let api = self.api.clone();
        async move { Outcome::Loaded(api.list().await) }
    }

    /// Create or update depending on the draft. The draft is captured now and stays as it is
    /// until the outcome is applied.
    pub fn submit(&self) -> impl Future<Output = Outcome> + Send + use<A> {
        let api = self.api.clone();
        let submission = self.form.submission();
        async move {
            match submission {
                Submission::Create(hospital) => Outcome::Created(api.create(hospital).await),
                Submission::Update { id, hospital } => {
                    Outcome::Updated(api.update(id, hospital).await)
                }
            }
        }
    }

    /// Delete a hospital. The draft is not involved, even if it is editing `id`.
    pub fn delete(&self, id: HospitalId) -> impl Future<Output = Outcome> + Send + use<A> {
        let api = self.api.clone();
        async move { Outcome::Deleted(id, api.delete(id).await) }
    }

    /// Apply a completed request.
    ///
    /// On success the store is patched, and for submissions the draft goes back to an empty
    /// create. On failure the error is logged and returned, and nothing is touched.
    pub fn apply(&mut self, outcome: Outcome) -> ApiResult<()> {
        match outcome {
            Outcome::Loaded(Ok(hospitals)) => {
                info!("Loaded {} hospitals", hospitals.len());
                self.store.load(hospitals);
            }
            Outcome::Loaded(Err(err)) => return Err(failed("load hospitals", err)),
            Outcome::Created(Ok(hospital)) => {
                info!("Created hospital {}", hospital.id);
                self.store.append(hospital);
                self.form.reset();
            }
            Outcome::Created(Err(err)) => return Err(failed("create hospital", err)),
            Outcome::Updated(Ok(hospital)) => {
                info!("Updated hospital {}", hospital.id);
                self.store.replace(hospital);
                self.form.reset();
            }
            Outcome::Updated(Err(err)) => return Err(failed("update hospital", err)),
            Outcome::Deleted(id, Ok(())) => {
                info!("Deleted hospital {id}");
                self.store.remove(id);
            }
            Outcome::Deleted(id, Err(err)) => {
                return Err(failed(&format!("delete hospital {id}"), err));
            }
        }

        Ok(())
    }
}

fn failed(action: &str, err: ApiError) -> ApiError {
    error!("Failed to {action}: {err}");
    err
}
