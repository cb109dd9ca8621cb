//! Mock Backend
//!
//! In-process stand-in for the groups endpoint: answers after a fixed delay
//! and fails at random.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::MockConfig;

use super::{fixture_groups, GroupsResponse, GroupsSource, SourceError};

/// Mock groups source with randomized failures.
///
/// Calls share one RNG stream so a seed fixes the whole sequence; each call
/// still makes a fresh uniform draw and carries nothing else over.
pub struct MockGroupsSource {
    config: MockConfig,
    rng: Mutex<ChaCha8Rng>,
}

impl MockGroupsSource {
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Deterministic source, same seed gives the same success/failure sequence
    pub fn seeded(config: MockConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn roll_success(&self) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_bool(self.config.success_rate())
    }
}

#[async_trait(?Send)]
impl GroupsSource for MockGroupsSource {
    async fn fetch_groups(&self) -> Result<GroupsResponse, SourceError> {
        sleep(self.config.delay()).await;

        if self.roll_success() {
            Ok(GroupsResponse::success(fixture_groups()?))
        } else {
            Ok(GroupsResponse::failure())
        }
    }
}

/// Yield to the browser event loop for `duration`
async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;
}
