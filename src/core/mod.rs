pub mod clock;
pub mod events;
pub mod record_store;
pub mod seed;
pub mod services;
pub mod utils;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use events::{Notice, StoreEvent};
pub use record_store::{RecordStore, CURRENT_SCHEMA_VERSION};
pub use seed::{SeedGenerator, SeedOptions};
pub use validation::{FieldError, ValidationCode, ValidationErrors};
