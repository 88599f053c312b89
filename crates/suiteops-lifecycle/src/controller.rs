//! # Movement Controller
//!
//! Drives the movement screen: one [`SuiteView`] value object holding
//! everything the screen knows, and a [`MovementController`] that runs
//! each action as *authorize against fresh status -> command -> full
//! status re-fetch*.
//!
//! The view is only mutated with server-confirmed state, and only after
//! the command succeeded. A failed command returns an error and leaves
//! the view exactly as it was, so the operator never sees a state the
//! service did not report.

use thiserror::Error;
use tracing::{debug, info};

use suiteops_client::movements::{CheckInRequest, Movement, MovementSummary};
use suiteops_client::{ApiError, PmsClient};
use suiteops_core::{MovementId, SuiteId, SuiteStatus, UserId};

use crate::action::{authorize, ActionBlocked, MovementAction};

/// Where the operator lands after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Remain on the movement screen.
    Stay,
    /// Return to the occupancy board.
    Dashboard,
    /// Open the order screen for the given movement.
    Order(MovementId),
}

/// Errors from movement-screen actions.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The action is not allowed for the suite's current status.
    #[error(transparent)]
    Blocked(#[from] ActionBlocked),

    /// The suite does not exist on the service.
    #[error("suite {suite} not found")]
    SuiteNotFound {
        /// The suite that was looked up.
        suite: SuiteId,
    },

    /// An action needed the suite's open movement and none exists.
    #[error("no open movement found for suite {suite}")]
    NoOpenMovement {
        /// The suite that was looked up.
        suite: SuiteId,
    },

    /// The underlying API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Everything the movement screen knows, in one place.
///
/// `status` and `movement` hold the last server-confirmed values; both
/// start unresolved and are only written from fetch results.
#[derive(Debug, Clone)]
pub struct SuiteView {
    /// The suite this screen is about.
    pub suite_id: SuiteId,
    /// Last reported occupancy status.
    pub status: Option<SuiteStatus>,
    /// The open movement, once an action has resolved it.
    pub movement: Option<MovementSummary>,
}

impl SuiteView {
    /// A view with nothing resolved yet.
    pub fn new(suite_id: SuiteId) -> Self {
        Self {
            suite_id,
            status: None,
            movement: None,
        }
    }
}

/// Async command controller for the movement screen.
#[derive(Debug, Clone)]
pub struct MovementController {
    client: PmsClient,
}

impl MovementController {
    /// Create a controller over a configured PMS client.
    pub fn new(client: PmsClient) -> Self {
        Self { client }
    }

    /// Access the underlying client.
    pub fn client(&self) -> &PmsClient {
        &self.client
    }

    /// Open the movement screen for a suite: fetch its current status.
    pub async fn open_view(&self, suite: SuiteId) -> Result<SuiteView, LifecycleError> {
        let mut view = SuiteView::new(suite);
        view.status = Some(self.fetch_status(suite).await?);
        Ok(view)
    }

    /// Re-fetch the suite's status into the view.
    pub async fn refresh(&self, view: &mut SuiteView) -> Result<(), LifecycleError> {
        view.status = Some(self.fetch_status(view.suite_id).await?);
        Ok(())
    }

    /// Check in: open a movement for an available suite.
    ///
    /// Requires a resolved staff identity; the extra-guest count is
    /// non-negative by construction. Lands on the dashboard.
    pub async fn check_in(
        &self,
        view: &mut SuiteView,
        user: UserId,
        extra_guests: u32,
    ) -> Result<Navigation, LifecycleError> {
        let status = self.fetch_status(view.suite_id).await?;
        authorize(status, MovementAction::CheckIn)?;

        let movement = self
            .client
            .movements()
            .check_in(&CheckInRequest {
                sui_id: view.suite_id,
                usr_id: user,
                qtd_usr_extra: extra_guests,
            })
            .await?;
        info!(suite = %view.suite_id, movement = %movement.id, "movement opened");

        view.status = Some(self.fetch_status(view.suite_id).await?);
        view.movement = None;
        Ok(Navigation::Dashboard)
    }

    /// Close the suite's open movement.
    ///
    /// The movement id is taken from the view when already resolved, and
    /// looked up from the suite otherwise. Lands on the dashboard.
    pub async fn close(&self, view: &mut SuiteView) -> Result<Navigation, LifecycleError> {
        let status = self.fetch_status(view.suite_id).await?;
        authorize(status, MovementAction::Closing)?;

        let movement_id = match &view.movement {
            Some(summary) => summary.id,
            None => self.resolve_open_movement(view.suite_id).await?.id,
        };

        let closed = self.client.movements().close(movement_id).await?;
        info!(suite = %view.suite_id, movement = %closed.id, "movement closed");

        view.movement = None;
        view.status = Some(self.fetch_status(view.suite_id).await?);
        Ok(Navigation::Dashboard)
    }

    /// Close a movement whose id is already known (the order screen's
    /// closing button). Returns the finalized record.
    pub async fn close_movement(&self, movement: MovementId) -> Result<Movement, LifecycleError> {
        let closed = self.client.movements().close(movement).await?;
        info!(movement = %closed.id, "movement closed");
        Ok(closed)
    }

    /// Navigate to the order screen for the suite's open movement.
    ///
    /// A pure read: resolves the open movement and returns its
    /// destination. No command is issued and no status re-fetch happens.
    pub async fn order(&self, view: &mut SuiteView) -> Result<Navigation, LifecycleError> {
        let status = self.fetch_status(view.suite_id).await?;
        authorize(status, MovementAction::Order)?;

        let summary = self.resolve_open_movement(view.suite_id).await?;
        let destination = Navigation::Order(summary.id);
        view.movement = Some(summary);
        Ok(destination)
    }

    /// Force the suite into cleaning. Unconditional; lands on the
    /// dashboard after a status re-fetch.
    pub async fn set_cleaning(&self, view: &mut SuiteView) -> Result<Navigation, LifecycleError> {
        self.client.suites().set_cleaning(view.suite_id).await?;
        info!(suite = %view.suite_id, "suite sent to cleaning");

        view.status = Some(self.fetch_status(view.suite_id).await?);
        Ok(Navigation::Dashboard)
    }

    /// Force the suite into maintenance. Unconditional; lands on the
    /// dashboard after a status re-fetch.
    pub async fn set_maintenance(
        &self,
        view: &mut SuiteView,
    ) -> Result<Navigation, LifecycleError> {
        self.client.suites().set_maintenance(view.suite_id).await?;
        info!(suite = %view.suite_id, "suite sent to maintenance");

        view.status = Some(self.fetch_status(view.suite_id).await?);
        Ok(Navigation::Dashboard)
    }

    async fn fetch_status(&self, suite: SuiteId) -> Result<SuiteStatus, LifecycleError> {
        let record = self
            .client
            .suites()
            .get(suite)
            .await?
            .ok_or(LifecycleError::SuiteNotFound { suite })?;
        let status = record.status.unwrap_or(SuiteStatus::Unknown);
        debug!(%suite, %status, "suite status fetched");
        Ok(status)
    }

    async fn resolve_open_movement(
        &self,
        suite: SuiteId,
    ) -> Result<MovementSummary, LifecycleError> {
        self.client
            .movements()
            .open_movement(suite)
            .await?
            .ok_or(LifecycleError::NoOpenMovement { suite })
    }
}
