use serde::{Deserialize, Serialize};

/// Monotonically increasing token issued for every dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub(crate) u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three actions an async operation goes through.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncAction<A, T> {
    Pending {
        request: RequestId,
        arg: A,
    },
    Fulfilled {
        request: RequestId,
        arg: A,
        payload: T,
    },
    Rejected {
        request: RequestId,
        arg: A,
        error: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Status bookkeeping for one async operation inside a slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracked {
    pub status: RequestStatus,
    pub error: Option<String>,
    pub latest: Option<RequestId>,
}

impl Tracked {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn is_failed(&self) -> bool {
        self.status == RequestStatus::Failed
    }
}

/// What a slice reducer should do with an async action after the status update.
pub(crate) enum Transition<'a, A, T> {
    Started(&'a A),
    Succeeded(&'a A, &'a T),
    Failed(&'a A),
    /// Completion of a request that is no longer the latest for this slice.
    Stale,
}

impl<A, T> AsyncAction<A, T> {
    pub fn request(&self) -> RequestId {
        match self {
            AsyncAction::Pending { request, .. }
            | AsyncAction::Fulfilled { request, .. }
            | AsyncAction::Rejected { request, .. } => *request,
        }
    }

    pub fn arg(&self) -> &A {
        match self {
            AsyncAction::Pending { arg, .. }
            | AsyncAction::Fulfilled { arg, .. }
            | AsyncAction::Rejected { arg, .. } => arg,
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            AsyncAction::Pending { .. } => "pending",
            AsyncAction::Fulfilled { .. } => "fulfilled",
            AsyncAction::Rejected { .. } => "rejected",
        }
    }

    /// Moves `tracked` through its lifecycle.
    ///
    /// A pending action always becomes the latest request. Completions are only
    /// applied when they carry the latest token; anything older is reported as
    /// [`Transition::Stale`] and leaves `tracked` untouched.
    pub(crate) fn advance(&self, tracked: &mut Tracked) -> Transition<'_, A, T> {
        match self {
            AsyncAction::Pending { request, arg } => {
                tracked.latest = Some(*request);
                tracked.status = RequestStatus::Pending;
                tracked.error = None;
                Transition::Started(arg)
            }
            AsyncAction::Fulfilled {
                request,
                arg,
                payload,
            } => {
                if tracked.latest != Some(*request) {
                    return Transition::Stale;
                }
                tracked.status = RequestStatus::Succeeded;
                tracked.error = None;
                Transition::Succeeded(arg, payload)
            }
            AsyncAction::Rejected {
                request,
                arg,
                error,
            } => {
                if tracked.latest != Some(*request) {
                    return Transition::Stale;
                }
                tracked.status = RequestStatus::Failed;
                tracked.error = Some(error.clone());
                Transition::Failed(arg)
            }
        }
    }
}
