pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::{MOCK_PASSWORD, TEST_JWT_SECRET},
        test_setup_with_all_tables, test_setup_with_migrations, test_setup_with_tables,
        TestBuilder, TestError, TestSetup,
    };
}
