use crate::utils::Environment;
use std::sync::Arc;


pub fn create_test_environment() -> Arc<Environment> {
    Arc::new(Environment::new_silent())
}
