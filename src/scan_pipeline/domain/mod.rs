pub mod api_request;
pub mod artifact;
pub mod credentials;
pub mod image_push;
pub mod load_profile;
pub mod outcome;
pub mod policy;
pub mod repository;
pub mod target;
pub mod watch;

pub use api_request::{ApiRequest, ApiResponse, HttpMethod, RequestName};
pub use artifact::{ArtifactRef, Pagination, ViolationQuery};
pub use credentials::{Credentials, Session, SessionHeaders};
pub use image_push::{image_push_commands, CommandInvocation};
pub use load_profile::{LoadProfile, WaitTime};
pub use outcome::{IterationSummary, RequestOutcome};
pub use policy::SecurityPolicy;
pub use repository::RepositoryConfig;
pub use target::{TargetCoordinates, DEFAULT_IMAGE_NAME, DEFAULT_IMAGE_TAG, DEFAULT_REPO_NAME};
pub use watch::{ApplyWatchRequest, DateRange, Watch};
