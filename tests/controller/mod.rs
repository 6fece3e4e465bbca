//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes, response
//! bodies and that writes are committed through the unit of work.

mod auth;
mod character;
mod favorite;
mod planet;
mod user;

use holocron_test_utils::prelude::*;

use crate::util::{as_user, json_body, TestSetupExt};
