//! Process-local implementation of [`Storage`].

use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{
    Booking, NewBooking, NewPortfolioItem, NewService, NewTeamMember, NewUser, PortfolioItem,
    Service, TeamMember, User,
};
use crate::seed;
use crate::store::{CollectionSizes, Storage};

pub(crate) trait Keyed {
    fn key(&self) -> Uuid;
}

macro_rules! keyed {
    ($($ty:ty),+ $(,)?) => {
        $(impl Keyed for $ty {
            fn key(&self) -> Uuid {
                self.id
            }
        })+
    };
}

keyed!(User, PortfolioItem, TeamMember, Service, Booking);

/// Insertion-ordered entities with an id index.
#[derive(Debug)]
pub(crate) struct Collection<T> {
    items: Vec<T>,
    index: HashMap<Uuid, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed + Clone> Collection<T> {
    /// A fresh id that no stored entity uses.
    pub(crate) fn vacant_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.index.contains_key(&id) {
                return id;
            }
        }
    }

    /// Stores `item`, whose id must come from [`Collection::vacant_id`].
    pub(crate) fn push(&mut self, item: T) -> T {
        debug_assert!(!self.index.contains_key(&item.key()));
        self.index.insert(item.key(), self.items.len());
        self.items.push(item.clone());
        item
    }

    pub(crate) fn get(&self, id: &Uuid) -> Option<T> {
        self.index.get(id).and_then(|&pos| self.items.get(pos)).cloned()
    }

    pub(crate) fn all(&self) -> Vec<T> {
        self.items.clone()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) users: Collection<User>,
    pub(crate) portfolio_items: Collection<PortfolioItem>,
    pub(crate) team_members: Collection<TeamMember>,
    pub(crate) services: Collection<Service>,
    pub(crate) bookings: Collection<Booking>,
}

/// All five collections behind a single reader/writer lock.
#[derive(Debug, Default)]
pub struct MemStorage {
    inner: RwLock<Collections>,
}

impl MemStorage {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the site fixtures.
    pub fn with_seed_data() -> Self {
        let mut collections = Collections::default();
        seed::populate(&mut collections);
        tracing::info!(
            portfolio_items = collections.portfolio_items.len(),
            team_members = collections.team_members.len(),
            services = collections.services.len(),
            "seeded in-memory store"
        );
        Self {
            inner: RwLock::new(collections),
        }
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn sizes(&self) -> CollectionSizes {
        let data = self.inner.read().await;
        CollectionSizes {
            users: data.users.len(),
            portfolio_items: data.portfolio_items.len(),
            team_members: data.team_members.len(),
            services: data.services.len(),
            bookings: data.bookings.len(),
        }
    }

    async fn get_users(&self) -> Vec<User> {
        self.inner.read().await.users.all()
    }

    async fn get_user(&self, id: Uuid) -> Option<User> {
        self.inner.read().await.users.get(&id)
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut data = self.inner.write().await;
        if data.users.iter().any(|u| u.username == user.username) {
            return Err(StorageError::UsernameTaken(user.username));
        }
        let id = data.users.vacant_id();
        let user = data.users.push(user.into_entity(id));
        tracing::debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn get_portfolio_items(&self) -> Vec<PortfolioItem> {
        self.inner.read().await.portfolio_items.all()
    }

    async fn get_portfolio_item(&self, id: Uuid) -> Option<PortfolioItem> {
        self.inner.read().await.portfolio_items.get(&id)
    }

    async fn get_portfolio_items_by_category(&self, category: &str) -> Vec<PortfolioItem> {
        self.inner
            .read()
            .await
            .portfolio_items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }

    async fn create_portfolio_item(
        &self,
        item: NewPortfolioItem,
    ) -> Result<PortfolioItem, StorageError> {
        let mut data = self.inner.write().await;
        let id = data.portfolio_items.vacant_id();
        let item = data
            .portfolio_items
            .push(item.into_entity(id, OffsetDateTime::now_utc()));
        tracing::debug!(item_id = %item.id, category = %item.category, "portfolio item created");
        Ok(item)
    }

    async fn get_team_members(&self) -> Vec<TeamMember> {
        self.inner.read().await.team_members.all()
    }

    async fn get_team_member(&self, id: Uuid) -> Option<TeamMember> {
        self.inner.read().await.team_members.get(&id)
    }

    async fn create_team_member(&self, member: NewTeamMember) -> Result<TeamMember, StorageError> {
        let mut data = self.inner.write().await;
        let id = data.team_members.vacant_id();
        let member = data.team_members.push(member.into_entity(id));
        tracing::debug!(member_id = %member.id, "team member created");
        Ok(member)
    }

    async fn get_services(&self) -> Vec<Service> {
        self.inner.read().await.services.all()
    }

    async fn get_service(&self, id: Uuid) -> Option<Service> {
        self.inner.read().await.services.get(&id)
    }

    async fn create_service(&self, service: NewService) -> Result<Service, StorageError> {
        let mut data = self.inner.write().await;
        let id = data.services.vacant_id();
        let service = data.services.push(service.into_entity(id));
        tracing::debug!(service_id = %service.id, "service created");
        Ok(service)
    }

    async fn get_bookings(&self) -> Vec<Booking> {
        self.inner.read().await.bookings.all()
    }

    async fn get_booking(&self, id: Uuid) -> Option<Booking> {
        self.inner.read().await.bookings.get(&id)
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, StorageError> {
        let mut data = self.inner.write().await;
        let id = data.bookings.vacant_id();
        let booking = data
            .bookings
            .push(booking.into_entity(id, OffsetDateTime::now_utc()));
        tracing::info!(booking_id = %booking.id, service = %booking.service, "booking received");
        Ok(booking)
    }
}
