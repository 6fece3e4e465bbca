
use holocron_test_utils::prelude::*;

use crate::server::{
    error::Error, model::favorite::FavoriteTarget, service::favorite::FavoriteService,
};
