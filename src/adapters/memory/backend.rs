use crate::domain::booking::{Booking, BookingStatus, StateFilter};
use crate::domain::comment::Comment;
use crate::domain::item::Item;
use crate::domain::request::ItemRequest;
use crate::domain::user::User;
use crate::domain::value_objects::{BookingId, CommentId, ItemId, Page, RequestId, UserId};
use crate::ports::{
    booking_store, comment_store, item_store, request_store, user_store, BookingStore,
    CommentStore, ItemStore, RequestStore, UserStore,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory implementation of every store port.
///
/// Backs the integration and e2e tests. All entity maps live in one
/// struct so owner-scoped booking queries can resolve item ownership.
#[derive(Default)]
pub struct MemoryBackend {
    users: Mutex<HashMap<UserId, User>>,
    items: Mutex<HashMap<ItemId, Item>>,
    bookings: Mutex<HashMap<BookingId, Booking>>,
    comments: Mutex<HashMap<CommentId, Comment>>,
    requests: Mutex<HashMap<RequestId, ItemRequest>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn owned_item_ids(&self, owner_id: UserId) -> Vec<ItemId> {
        self.items
            .lock()
            .unwrap()
            .values()
            .filter(|item| item.owner_id == owner_id)
            .map(|item| item.item_id)
            .collect()
    }
}

/// フィルタ適用後の共通処理：並べ替えてページを切り出す
fn sort_and_page(mut bookings: Vec<Booking>, filter: StateFilter, page: Page) -> Vec<Booking> {
    if filter.sorts_by_start_desc() {
        bookings.sort_by(|a, b| b.start.cmp(&a.start));
    }

    bookings
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

#[async_trait]
impl UserStore for MemoryBackend {
    async fn save(&self, user: User) -> user_store::Result<()> {
        self.users.lock().unwrap().insert(user.user_id, user);
        Ok(())
    }

    async fn get_by_id(&self, user_id: UserId) -> user_store::Result<Option<User>> {
        Ok(self.users.lock().unwrap().get(&user_id).cloned())
    }

    async fn exists(&self, user_id: UserId) -> user_store::Result<bool> {
        Ok(self.users.lock().unwrap().contains_key(&user_id))
    }

    async fn find_by_email(&self, email: &str) -> user_store::Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_all(&self) -> user_store::Result<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn delete(&self, user_id: UserId) -> user_store::Result<bool> {
        Ok(self.users.lock().unwrap().remove(&user_id).is_some())
    }
}

#[async_trait]
impl ItemStore for MemoryBackend {
    async fn save(&self, item: Item) -> item_store::Result<()> {
        self.items.lock().unwrap().insert(item.item_id, item);
        Ok(())
    }

    async fn get_by_id(&self, item_id: ItemId) -> item_store::Result<Option<Item>> {
        Ok(self.items.lock().unwrap().get(&item_id).cloned())
    }

    async fn exists(&self, item_id: ItemId) -> item_store::Result<bool> {
        Ok(self.items.lock().unwrap().contains_key(&item_id))
    }

    async fn find_by_owner_id(&self, owner_id: UserId, page: Page) -> item_store::Result<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| item.owner_id == owner_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(items
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn search(&self, text: &str, page: Page) -> item_store::Result<Vec<Item>> {
        let needle = text.to_lowercase();
        let mut items: Vec<Item> = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| {
                item.available
                    && (item.name.to_lowercase().contains(&needle)
                        || item.description.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(items
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn find_by_request_id(&self, request_id: RequestId) -> item_store::Result<Vec<Item>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| item.request_id == Some(request_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, item_id: ItemId) -> item_store::Result<bool> {
        Ok(self.items.lock().unwrap().remove(&item_id).is_some())
    }
}

#[async_trait]
impl BookingStore for MemoryBackend {
    async fn save(&self, booking: Booking) -> booking_store::Result<()> {
        self.bookings
            .lock()
            .unwrap()
            .insert(booking.booking_id, booking);
        Ok(())
    }

    async fn get_by_id(&self, booking_id: BookingId) -> booking_store::Result<Option<Booking>> {
        Ok(self.bookings.lock().unwrap().get(&booking_id).cloned())
    }

    async fn find_for_booker(
        &self,
        booker_id: UserId,
        filter: StateFilter,
        now: DateTime<Utc>,
        page: Page,
    ) -> booking_store::Result<Vec<Booking>> {
        let bookings: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .values()
            .filter(|booking| booking.booker_id == booker_id && filter.matches(booking, now))
            .cloned()
            .collect();

        Ok(sort_and_page(bookings, filter, page))
    }

    async fn find_for_owner(
        &self,
        owner_id: UserId,
        filter: StateFilter,
        now: DateTime<Utc>,
        page: Page,
    ) -> booking_store::Result<Vec<Booking>> {
        let owned = self.owned_item_ids(owner_id);

        let bookings: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .values()
            .filter(|booking| owned.contains(&booking.item_id) && filter.matches(booking, now))
            .cloned()
            .collect();

        Ok(sort_and_page(bookings, filter, page))
    }

    async fn find_for_item(&self, item_id: ItemId) -> booking_store::Result<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .values()
            .filter(|booking| booking.item_id == item_id)
            .cloned()
            .collect())
    }

    async fn find_last_for_item(
        &self,
        item_id: ItemId,
        now: DateTime<Utc>,
    ) -> booking_store::Result<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .values()
            .filter(|booking| {
                booking.item_id == item_id
                    && booking.status != BookingStatus::Rejected
                    && booking.start < now
            })
            .max_by_key(|booking| booking.start)
            .cloned())
    }

    async fn find_next_for_item(
        &self,
        item_id: ItemId,
        now: DateTime<Utc>,
    ) -> booking_store::Result<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .values()
            .filter(|booking| {
                booking.item_id == item_id
                    && booking.status != BookingStatus::Rejected
                    && booking.start > now
            })
            .min_by_key(|booking| booking.start)
            .cloned())
    }
}

#[async_trait]
impl CommentStore for MemoryBackend {
    async fn save(&self, comment: Comment) -> comment_store::Result<()> {
        self.comments
            .lock()
            .unwrap()
            .insert(comment.comment_id, comment);
        Ok(())
    }

    async fn find_by_item_id(&self, item_id: ItemId) -> comment_store::Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .values()
            .filter(|comment| comment.item_id == item_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| comment.created_at);

        Ok(comments)
    }
}

#[async_trait]
impl RequestStore for MemoryBackend {
    async fn save(&self, request: ItemRequest) -> request_store::Result<()> {
        self.requests
            .lock()
            .unwrap()
            .insert(request.request_id, request);
        Ok(())
    }

    async fn get_by_id(&self, request_id: RequestId) -> request_store::Result<Option<ItemRequest>> {
        Ok(self.requests.lock().unwrap().get(&request_id).cloned())
    }

    async fn find_by_requestor_id(
        &self,
        requestor_id: UserId,
    ) -> request_store::Result<Vec<ItemRequest>> {
        let mut requests: Vec<ItemRequest> = self
            .requests
            .lock()
            .unwrap()
            .values()
            .filter(|request| request.requestor_id == requestor_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(requests)
    }

    async fn find_all_excluding(
        &self,
        requestor_id: UserId,
        page: Page,
    ) -> request_store::Result<Vec<ItemRequest>> {
        let mut requests: Vec<ItemRequest> = self
            .requests
            .lock()
            .unwrap()
            .values()
            .filter(|request| request.requestor_id != requestor_id)
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(requests
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }
}
