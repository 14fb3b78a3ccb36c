pub mod handlers;
pub mod response;
pub mod router;

pub use response::ApiResponse;
pub use router::build_router;
