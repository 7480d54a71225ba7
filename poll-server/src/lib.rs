pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use api::{
    error::{ApiError, Result as ApiResult},
    polls::{
        create_poll_request::CreatePollRequest,
        delete_response::DeleteResponse,
        poll_dto::{PollDto, PollOptionDto},
        poll_response::PollResponse,
        polls::{create_poll, delete_poll, get_poll, list_polls, record_vote},
        vote_request::VoteRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
