use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    api::{ApiError, ApiResult, HospitalApi},
    record::{Hospital, HospitalId},
};

/// A call received by [`MockApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(Hospital),
    Update(HospitalId, Hospital),
    Delete(HospitalId),
}

#[derive(Debug, Default)]
struct Server {
    records: Vec<Hospital>,
    next_id: u64,
    offline: bool,
    calls: Vec<Call>,
}

/// In-memory stand-in for the hospital resource.
///
/// Behaves like the real server: ids are handed out in call order, unknown ids answer 404.
/// Going offline makes every call fail with a 503.
#[derive(Debug, Clone, Default)]
pub struct MockApi {
    server: Arc<Mutex<Server>>,
}

impl MockApi {
    pub fn with_records(records: Vec<Hospital>) -> Self {
        let next_id = records.iter().map(|h| h.id.get()).max().unwrap_or(0) + 1;
        Self {
            server: Arc::new(Mutex::new(Server {
                records,
                next_id,
                ..Default::default()
            })),
        }
    }

    pub fn set_next_id(&self, id: u64) {
        self.server.lock().next_id = id;
    }

    pub fn set_offline(&self, offline: bool) {
        self.server.lock().offline = offline;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.server.lock().calls.clone()
    }

    /// What the server currently holds.
    pub fn records(&self) -> Vec<Hospital> {
        self.server.lock().records.clone()
    }

    fn handle<T>(&self, call: Call, f: impl FnOnce(&mut Server) -> ApiResult<T>) -> ApiResult<T> {
        let mut server = self.server.lock();
        server.calls.push(call);
        if server.offline {
            return Err(ApiError::Status { status: 503 });
        }
        f(&mut server)
    }
}

const NOT_FOUND: ApiError = ApiError::Status { status: 404 };

impl HospitalApi for MockApi {
    async fn list(&self) -> ApiResult<Vec<Hospital>> {
        self.handle(Call::List, |server| Ok(server.records.clone()))
    }

    async fn create(&self, hospital: Hospital) -> ApiResult<Hospital> {
        self.handle(Call::Create(hospital.clone()), |server| {
            let created = Hospital {
                id: HospitalId::new(server.next_id),
                ..hospital
            };
            server.next_id += 1;
            server.records.push(created.clone());
            Ok(created)
        })
    }

    async fn update(&self, id: HospitalId, hospital: Hospital) -> ApiResult<Hospital> {
        self.handle(Call::Update(id, hospital.clone()), |server| {
            let slot = server
                .records
                .iter_mut()
                .find(|h| h.id == id)
                .ok_or(NOT_FOUND)?;
            *slot = Hospital { id, ..hospital };
            Ok(slot.clone())
        })
    }

    async fn delete(&self, id: HospitalId) -> ApiResult<()> {
        self.handle(Call::Delete(id), |server| {
            let before = server.records.len();
            server.records.retain(|h| h.id != id);
            if server.records.len() == before {
                return Err(NOT_FOUND);
            }
            Ok(())
        })
    }
}
