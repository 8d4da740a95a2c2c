#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use chrono::Duration;
use directory_service::domain::admin::errors::AdminError;
use directory_service::domain::admin::models::Admin;
use directory_service::domain::admin::models::AdminId;
use directory_service::domain::admin::models::Password;
use directory_service::domain::admin::models::RegisterAdminCommand;
use directory_service::domain::admin::models::Username;
use directory_service::domain::admin::ports::AdminRepository;
use directory_service::domain::admin::ports::AdminServicePort;
use directory_service::domain::admin::service::AdminService;
use directory_service::domain::employee::errors::EmployeeError;
use directory_service::domain::employee::models::Employee;
use directory_service::domain::employee::models::EmployeeId;
use directory_service::domain::employee::ports::EmployeeRepository;
use directory_service::domain::employee::service::EmployeeService;
use directory_service::inbound::http::router::create_router;
use reqwest::StatusCode;
use serde_json::json;
use tokio::sync::RwLock;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Credential store kept in memory for HTTP-level tests
#[derive(Default)]
pub struct InMemoryAdminRepository {
    admins: RwLock<HashMap<AdminId, Admin>>,
}

impl InMemoryAdminRepository {
    pub async fn password_hash_of(&self, username: &str) -> Option<String> {
        self.admins
            .read()
            .await
            .values()
            .find(|admin| admin.username.as_str() == username)
            .map(|admin| admin.password_hash.clone())
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn create(&self, admin: Admin) -> Result<Admin, AdminError> {
        let mut admins = self.admins.write().await;
        if admins.values().any(|a| a.username == admin.username) {
            return Err(AdminError::UsernameAlreadyExists(
                admin.username.as_str().to_string(),
            ));
        }
        admins.insert(admin.id, admin.clone());
        Ok(admin)
    }

    async fn find_by_id(&self, id: &AdminId) -> Result<Option<Admin>, AdminError> {
        Ok(self.admins.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Admin>, AdminError> {
        Ok(self
            .admins
            .read()
            .await
            .values()
            .find(|admin| &admin.username == username)
            .cloned())
    }

    async fn update_password_hash(
        &self,
        id: &AdminId,
        password_hash: &str,
    ) -> Result<(), AdminError> {
        match self.admins.write().await.get_mut(id) {
            Some(admin) => {
                admin.password_hash = password_hash.to_string();
                Ok(())
            }
            None => Err(AdminError::NotFound(id.to_string())),
        }
    }
}

/// Personnel records kept in memory for HTTP-level tests
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        self.employees.write().await.push(employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        Ok(self
            .employees
            .read()
            .await
            .iter()
            .find(|employee| &employee.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.employees.read().await.clone())
    }

    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let mut employees = self.employees.write().await;
        match employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => {
                *existing = employee.clone();
                Ok(employee)
            }
            None => Err(EmployeeError::NotFound(employee.id.to_string())),
        }
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|employee| &employee.id != id);
        if employees.len() == before {
            return Err(EmployeeError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub admin_repository: Arc<InMemoryAdminRepository>,
    pub admin_service: Arc<AdminService<InMemoryAdminRepository>>,
}

pub fn test_authenticator(secret: &[u8], window: Duration) -> Authenticator {
    // Low Argon2 cost keeps the suite fast; production uses the defaults.
    Authenticator::new(secret, window).with_password_hasher(
        PasswordHasher::with_params(8 * 1024, 1, 1).expect("valid test hashing parameters"),
    )
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(test_authenticator(JWT_SECRET, Duration::hours(1)));
        let admin_repository = Arc::new(InMemoryAdminRepository::default());
        let employee_repository = Arc::new(InMemoryEmployeeRepository::default());

        let admin_service = Arc::new(AdminService::new(
            Arc::clone(&admin_repository),
            Arc::clone(&authenticator),
        ));
        let employee_service = Arc::new(EmployeeService::new(employee_repository));

        let router = create_router(
            admin_service.clone(),
            employee_service,
            Arc::clone(&authenticator),
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
            admin_repository,
            admin_service,
        }
    }

    /// Register an admin directly through the domain service
    pub async fn register_admin(&self, username: &str, password: &str) -> Admin {
        let command = RegisterAdminCommand::new(
            Username::new(username.to_string()).expect("valid username"),
            Password::new(password.to_string()).expect("valid password"),
        );
        self.admin_service
            .register(command)
            .await
            .expect("Failed to register admin")
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the bearer token, asserting success
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("token missing from login response")
            .to_string()
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }
}

/// Change one character in the signature segment of a JWT
pub fn flip_signature_char(token: &str) -> String {
    let (unsigned, signature) = token.rsplit_once('.').expect("token has three segments");
    let mut signature: Vec<char> = signature.chars().collect();
    signature[5] = if signature[5] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", unsigned, signature.into_iter().collect::<String>())
}

pub fn sample_employee() -> serde_json::Value {
    json!({
        "name": "Ada Lovelace",
        "role": "Engineer",
        "company": "Analytical Engines"
    })
}
