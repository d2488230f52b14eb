//! In-memory adapters for every repository port.
//!
//! Back the integration suite (and any storage-free run) with plain maps so
//! the full HTTP stack can be exercised without PostgreSQL. Behavior mirrors
//! the SQL adapters: duplicate emails, missing foreign keys, and deletes of
//! absent rows fail the same way.

use std::collections::BTreeMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::catalog::errors::ServiceError;
use crate::domain::catalog::models::NewService;
use crate::domain::catalog::models::Service;
use crate::domain::catalog::models::ServiceId;
use crate::domain::catalog::ports::CatalogRepository;
use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::ClientWithOrders;
use crate::domain::client::models::NewClient;
use crate::domain::client::ports::ClientRepository;
use crate::domain::order::errors::OrderError;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::order::models::OrderStatus;
use crate::domain::order::ports::OrderRepository;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// In-memory user store.
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().expect("user store poisoned");

        if users
            .values()
            .any(|u| u.email.as_str() == user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = User {
            id: UserId(id),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().expect("user store poisoned");
        Ok(users.values().find(|u| u.email.as_str() == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.read().expect("user store poisoned");
        // Newest first, matching the SQL adapter ordering.
        Ok(users.values().rev().cloned().collect())
    }
}

/// In-memory client store.
pub struct InMemoryClientRepository {
    clients: RwLock<BTreeMap<i64, Client>>,
    orders: RwLock<BTreeMap<i64, Order>>,
    next_id: AtomicI64,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(BTreeMap::new()),
            orders: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Mirror an order into this store so client listings can embed it.
    pub fn attach_order(&self, order: Order) {
        self.orders
            .write()
            .expect("client store poisoned")
            .insert(order.id.value(), order);
    }

    /// Drop a mirrored order.
    pub fn detach_order(&self, id: OrderId) {
        self.orders
            .write()
            .expect("client store poisoned")
            .remove(&id.value());
    }

    pub fn contains(&self, id: ClientId) -> bool {
        self.clients
            .read()
            .expect("client store poisoned")
            .contains_key(&id.value())
    }

    fn email_taken(clients: &BTreeMap<i64, Client>, email: &str, excluding: Option<i64>) -> bool {
        clients.values().any(|c| {
            Some(c.id.value()) != excluding && c.email.as_deref() == Some(email)
        })
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn create(&self, client: NewClient) -> Result<Client, ClientError> {
        let mut clients = self.clients.write().expect("client store poisoned");

        if let Some(email) = &client.email {
            if Self::email_taken(&clients, email, None) {
                return Err(ClientError::EmailAlreadyExists(email.clone()));
            }
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = Client {
            id: ClientId(id),
            name: client.name,
            email: client.email,
            phone: client.phone,
            address: client.address,
            company: client.company,
            notes: client.notes,
            status: client.status,
            created_at: Utc::now(),
        };
        clients.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_with_orders(&self) -> Result<Vec<ClientWithOrders>, ClientError> {
        let clients = self.clients.read().expect("client store poisoned");
        let orders = self.orders.read().expect("client store poisoned");

        Ok(clients
            .values()
            .rev()
            .map(|client| ClientWithOrders {
                client: client.clone(),
                orders: orders
                    .values()
                    .filter(|o| o.client_id == client.id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ClientError> {
        let clients = self.clients.read().expect("client store poisoned");
        Ok(clients.get(&id.value()).cloned())
    }

    async fn update(&self, client: Client) -> Result<Client, ClientError> {
        let mut clients = self.clients.write().expect("client store poisoned");

        if !clients.contains_key(&client.id.value()) {
            return Err(ClientError::NotFound(client.id.to_string()));
        }
        if let Some(email) = &client.email {
            if Self::email_taken(&clients, email, Some(client.id.value())) {
                return Err(ClientError::EmailAlreadyExists(email.clone()));
            }
        }

        clients.insert(client.id.value(), client.clone());
        Ok(client)
    }

    async fn delete(&self, id: ClientId) -> Result<(), ClientError> {
        let mut clients = self.clients.write().expect("client store poisoned");
        clients
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    async fn count(&self) -> Result<i64, ClientError> {
        let clients = self.clients.read().expect("client store poisoned");
        Ok(clients.len() as i64)
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<Client>, ClientError> {
        let clients = self.clients.read().expect("client store poisoned");
        Ok(clients
            .values()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

/// In-memory order store.
///
/// Holds a reference to the client store to enforce the foreign key the SQL
/// schema enforces.
pub struct InMemoryOrderRepository {
    orders: RwLock<BTreeMap<i64, Order>>,
    clients: std::sync::Arc<InMemoryClientRepository>,
    next_id: AtomicI64,
}

impl InMemoryOrderRepository {
    pub fn new(clients: std::sync::Arc<InMemoryClientRepository>) -> Self {
        Self {
            orders: RwLock::new(BTreeMap::new()),
            clients,
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError> {
        if !self.clients.contains(order.client_id) {
            return Err(OrderError::ClientNotFound(order.client_id.to_string()));
        }

        let mut orders = self.orders.write().expect("order store poisoned");
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = Order {
            id: OrderId(id),
            client_id: order.client_id,
            title: order.title,
            description: order.description,
            status: order.status,
            priority: order.priority,
            total_amount: order.total_amount,
            order_date: order.order_date,
            due_date: order.due_date,
            created_at: Utc::now(),
        };
        orders.insert(id, stored.clone());
        self.clients.attach_order(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().expect("order store poisoned");
        Ok(orders.values().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        let orders = self.orders.read().expect("order store poisoned");
        Ok(orders.get(&id.value()).cloned())
    }

    async fn update(&self, order: Order) -> Result<Order, OrderError> {
        if !self.clients.contains(order.client_id) {
            return Err(OrderError::ClientNotFound(order.client_id.to_string()));
        }

        let mut orders = self.orders.write().expect("order store poisoned");
        if !orders.contains_key(&order.id.value()) {
            return Err(OrderError::NotFound(order.id.to_string()));
        }

        orders.insert(order.id.value(), order.clone());
        self.clients.attach_order(order.clone());
        Ok(order)
    }

    async fn delete(&self, id: OrderId) -> Result<(), OrderError> {
        let mut orders = self.orders.write().expect("order store poisoned");
        orders
            .remove(&id.value())
            .map(|_| self.clients.detach_order(id))
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    async fn count_with_status(&self, status: OrderStatus) -> Result<i64, OrderError> {
        let orders = self.orders.read().expect("order store poisoned");
        Ok(orders.values().filter(|o| o.status == status).count() as i64)
    }

    async fn sum_amounts_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<f64, OrderError> {
        let orders = self.orders.read().expect("order store poisoned");
        Ok(orders
            .values()
            .filter(|o| o.order_date >= start && o.order_date < end)
            .filter_map(|o| o.total_amount)
            .sum())
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().expect("order store poisoned");
        // Most recently placed first, matching the SQL adapter ordering.
        let mut recent: Vec<Order> = orders.values().cloned().collect();
        recent.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        recent.truncate(limit.max(0) as usize);
        Ok(recent)
    }
}

/// In-memory product store.
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, ProductError> {
        let mut products = self.products.write().expect("product store poisoned");
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = Product {
            id: ProductId(id),
            name: product.name,
            product_type: product.product_type,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: Utc::now(),
        };
        products.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.products.read().expect("product store poisoned");
        Ok(products.values().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        let products = self.products.read().expect("product store poisoned");
        Ok(products.get(&id.value()).cloned())
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.write().expect("product store poisoned");
        if !products.contains_key(&product.id.value()) {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        products.insert(product.id.value(), product.clone());
        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        let mut products = self.products.write().expect("product store poisoned");
        products
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}

/// In-memory catalog store.
pub struct InMemoryCatalogRepository {
    services: RwLock<BTreeMap<i64, Service>>,
    next_id: AtomicI64,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self {
            services: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn create(&self, service: NewService) -> Result<Service, ServiceError> {
        let mut services = self.services.write().expect("catalog store poisoned");
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = Service {
            id: ServiceId(id),
            name: service.name,
            service_type: service.service_type,
            description: service.description,
            price: service.price,
            duration: service.duration,
            created_at: Utc::now(),
        };
        services.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Service>, ServiceError> {
        let services = self.services.read().expect("catalog store poisoned");
        Ok(services.values().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: ServiceId) -> Result<Option<Service>, ServiceError> {
        let services = self.services.read().expect("catalog store poisoned");
        Ok(services.get(&id.value()).cloned())
    }

    async fn update(&self, service: Service) -> Result<Service, ServiceError> {
        let mut services = self.services.write().expect("catalog store poisoned");
        if !services.contains_key(&service.id.value()) {
            return Err(ServiceError::NotFound(service.id.to_string()));
        }

        services.insert(service.id.value(), service.clone());
        Ok(service)
    }

    async fn delete(&self, id: ServiceId) -> Result<(), ServiceError> {
        let mut services = self.services.write().expect("catalog store poisoned");
        services
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    async fn count(&self) -> Result<i64, ServiceError> {
        let services = self.services.read().expect("catalog store poisoned");
        Ok(services.len() as i64)
    }
}
