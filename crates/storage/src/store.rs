use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{
    Booking, NewBooking, NewPortfolioItem, NewService, NewTeamMember, NewUser, PortfolioItem,
    Service, TeamMember, User,
};

/// Entity counts, one per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionSizes {
    pub users: usize,
    pub portfolio_items: usize,
    pub team_members: usize,
    pub services: usize,
    pub bookings: usize,
}

/// Typed access to every collection the site serves.
///
/// Listing never fails and returns entities in insertion order. Point lookups
/// return `None` for unknown ids. Creates assign the id and every
/// server-owned field, then return the stored entity.
///
/// Payloads are expected to be validated by the caller before they get here.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Counts without copying any collection.
    async fn sizes(&self) -> CollectionSizes;

    async fn get_users(&self) -> Vec<User>;
    async fn get_user(&self, id: Uuid) -> Option<User>;
    /// Usernames are unique, so at most one user matches.
    async fn get_user_by_username(&self, username: &str) -> Option<User>;
    /// Fails with [`StorageError::UsernameTaken`] if the username is in use.
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    async fn get_portfolio_items(&self) -> Vec<PortfolioItem>;
    async fn get_portfolio_item(&self, id: Uuid) -> Option<PortfolioItem>;
    /// Exact match on `category`, keeping relative order.
    async fn get_portfolio_items_by_category(&self, category: &str) -> Vec<PortfolioItem>;
    async fn create_portfolio_item(
        &self,
        item: NewPortfolioItem,
    ) -> Result<PortfolioItem, StorageError>;

    async fn get_team_members(&self) -> Vec<TeamMember>;
    async fn get_team_member(&self, id: Uuid) -> Option<TeamMember>;
    async fn create_team_member(&self, member: NewTeamMember) -> Result<TeamMember, StorageError>;

    async fn get_services(&self) -> Vec<Service>;
    async fn get_service(&self, id: Uuid) -> Option<Service>;
    async fn create_service(&self, service: NewService) -> Result<Service, StorageError>;

    async fn get_bookings(&self) -> Vec<Booking>;
    async fn get_booking(&self, id: Uuid) -> Option<Booking>;
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, StorageError>;
}
