// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Appearance, Category, CategorySet, HairTrait, LowerColor, UpperColor, UserData, UserRecord,
};
pub use requests::{CreateUserRequest, NearbyQuery};
pub use responses::{
    CleanupResponse, ErrorResponse, HealthResponse, ListUsersResponse, NearbyResponse,
};
