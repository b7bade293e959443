//! Session and role resolution.
//!
//! A [`SessionResolver`] checks credentials against the catalog's demo
//! accounts, builds the signed-in [`User`], and echoes it into a
//! [`SessionStore`] so a later resolver over the same store starts already
//! signed in.

mod error;
mod form;
mod store;

pub use error::SessionError;
pub use form::LoginForm;
pub use store::{MemoryStore, SessionStore, SqliteStore};

use crate::catalog::{Catalog, DemoAccount};
use crate::types::{Role, User};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Store key holding the serialized [`User`].
pub const SESSION_KEY: &str = "mywork-user";

/// Department assigned to the student and faculty demo users.
const DEMO_DEPARTMENT: &str = "Computer Science Engineering";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
}

/// Holds the single active session for one portal instance.
pub struct SessionResolver {
    catalog: Arc<Catalog>,
    store: Arc<dyn SessionStore>,
    state: SessionState,
}

impl SessionResolver {
    /// Creates a resolver, adopting any session already persisted in `store`.
    ///
    /// A persisted entry is trusted as-is; it is not checked against the demo
    /// accounts. An entry that fails to decode is logged, removed, and the
    /// resolver starts anonymous.
    ///
    /// # Returns
    /// * `Ok(SessionResolver)` - Anonymous or restored resolver
    /// * `Err` - If the store itself could not be read
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn SessionStore>) -> Result<Self, SessionError> {
        let state = match store.get(SESSION_KEY)? {
            None => SessionState::Anonymous,
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!("Restored {} session for {}", user.role, user.id);
                    SessionState::Authenticated(user)
                }
                Err(e) => {
                    warn!("Discarding malformed session entry: {}", e);
                    store.remove(SESSION_KEY)?;
                    SessionState::Anonymous
                }
            },
        };

        Ok(Self {
            catalog,
            store,
            state,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The signed-in user, if any.
    pub fn current(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.current().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Signs in with a role's demo credentials.
    ///
    /// Email and password are compared exactly (case-sensitive). On any
    /// mismatch the current session, in memory and in the store, is left as
    /// it was.
    ///
    /// # Returns
    /// * `Ok(User)` - The new session's user
    /// * `Err(SessionError::InvalidCredentials)` - Email or password mismatch
    /// * `Err` - If the store write failed
    pub fn login(&mut self, email: &str, password: &str, role: Role) -> Result<User, SessionError> {
        let account = self.account(role)?;
        if email != account.email || password != account.password {
            info!("Rejected {} login for {}", role, email);
            return Err(SessionError::InvalidCredentials);
        }

        let user = demo_user(role, account);
        info!("{} logged in as {}", user.email, role);
        self.establish(user)
    }

    /// Signs in as a role's demo user without checking credentials.
    pub fn quick_login(&mut self, role: Role) -> Result<User, SessionError> {
        let user = demo_user(role, self.account(role)?);
        info!("Quick login as {}", role);
        self.establish(user)
    }

    /// Ends the session and removes the persisted entry.
    ///
    /// The entry is removed first; if that fails the session stays active.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.remove(SESSION_KEY)?;
        if let SessionState::Authenticated(user) = &self.state {
            info!("Logging out {}", user.id);
        }
        self.state = SessionState::Anonymous;
        Ok(())
    }

    fn account(&self, role: Role) -> Result<&DemoAccount, SessionError> {
        self.catalog
            .demo_account(role)
            .ok_or_else(|| SessionError::UnknownAccount {
                role: role.to_string(),
            })
    }

    /// Persists `user` and then adopts it. Nothing changes if the write fails.
    fn establish(&mut self, user: User) -> Result<User, SessionError> {
        let raw = serde_json::to_string(&user)?;
        self.store.set(SESSION_KEY, &raw)?;
        debug!("Persisted session entry ({} bytes)", raw.len());

        self.state = SessionState::Authenticated(user.clone());
        Ok(user)
    }
}

/// Builds the user a demo account signs in as.
pub fn demo_user(role: Role, account: &DemoAccount) -> User {
    let is_student = role == Role::Student;
    let has_department = matches!(role, Role::Student | Role::Faculty);

    User {
        id: format!("{}-1", role),
        name: account.name.clone(),
        email: account.email.clone(),
        role,
        department: has_department.then(|| DEMO_DEPARTMENT.to_string()),
        year: is_student.then_some(3),
        section: is_student.then(|| "A".to_string()),
        profile_image: None,
        parent_id: None,
        mentor_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Arc<Catalog>, Arc<MemoryStore>, SessionResolver) {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let store = Arc::new(MemoryStore::new());
        let resolver = SessionResolver::new(catalog.clone(), store.clone()).unwrap();
        (catalog, store, resolver)
    }

    #[test]
    fn test_starts_anonymous() {
        let (_, store, resolver) = setup();

        assert_eq!(resolver.state(), &SessionState::Anonymous);
        assert!(store.is_empty());
    }

    #[test]
    fn test_quick_login_every_role() {
        let (_, store, mut resolver) = setup();

        for role in Role::ALL {
            let user = resolver.quick_login(role).unwrap();
            assert_eq!(user.role, role);
            assert_eq!(user.id, format!("{}-1", role));
            assert_eq!(resolver.role(), Some(role));

            let persisted: User =
                serde_json::from_str(&store.get(SESSION_KEY).unwrap().unwrap()).unwrap();
            assert_eq!(persisted, user);
        }
    }

    #[test]
    fn test_student_login() {
        let (_, _, mut resolver) = setup();
        let user = resolver
            .login("student@mywork.edu", "demo123", Role::Student)
            .unwrap();

        assert_eq!(user.name, "Rohit Sharma");
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.department.as_deref(), Some("Computer Science Engineering"));
        assert_eq!(user.year, Some(3));
        assert_eq!(user.section.as_deref(), Some("A"));
    }

    #[test]
    fn test_non_student_demo_users() {
        let (catalog, _, _) = setup();

        let faculty = demo_user(Role::Faculty, catalog.demo_account(Role::Faculty).unwrap());
        assert_eq!(faculty.department.as_deref(), Some("Computer Science Engineering"));
        assert_eq!(faculty.year, None);

        let admin = demo_user(Role::Admin, catalog.demo_account(Role::Admin).unwrap());
        assert_eq!(admin.department, None);
        assert_eq!(admin.section, None);
    }

    #[test]
    fn test_login_requires_exact_match() {
        let (catalog, store, mut resolver) = setup();

        for role in Role::ALL {
            let account = catalog.demo_account(role).unwrap();
            let attempts = [
                (account.email.clone(), "wrongpass".to_string()),
                (account.email.to_uppercase(), account.password.clone()),
                (String::new(), account.password.clone()),
                (account.email.clone(), format!("{} ", account.password)),
            ];
            for (email, password) in attempts {
                let err = resolver.login(&email, &password, role).unwrap_err();
                assert_eq!(err, SessionError::InvalidCredentials);
            }
        }

        assert!(!resolver.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn test_role_mismatch_is_rejected() {
        let (_, _, mut resolver) = setup();
        let err = resolver
            .login("student@mywork.edu", "demo123", Role::Faculty)
            .unwrap_err();

        assert_eq!(err, SessionError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials or role mismatch");
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let (_, store, mut resolver) = setup();
        resolver.quick_login(Role::Alumni).unwrap();
        let before = store.get(SESSION_KEY).unwrap();

        assert!(resolver
            .login("recruiter@mywork.edu", "nope", Role::Recruiter)
            .is_err());
        assert_eq!(resolver.role(), Some(Role::Alumni));
        assert_eq!(store.get(SESSION_KEY).unwrap(), before);
    }

    #[test]
    fn test_last_login_wins() {
        let (_, _, mut resolver) = setup();
        resolver.quick_login(Role::Parent).unwrap();
        resolver
            .login("admin@mywork.edu", "demo123", Role::Admin)
            .unwrap();

        assert_eq!(resolver.role(), Some(Role::Admin));
    }

    #[test]
    fn test_logout_clears_memory_and_store() {
        let (_, store, mut resolver) = setup();
        resolver.quick_login(Role::Recruiter).unwrap();
        resolver.logout().unwrap();

        assert_eq!(resolver.current(), None);
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);

        // Logging out twice is harmless
        resolver.logout().unwrap();
    }

    /// Accepts writes but refuses to delete anything.
    struct NoRemoveStore(MemoryStore);

    impl SessionStore for NoRemoveStore {
        fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
            self.0.set(key, value)
        }

        fn remove(&self, _key: &str) -> Result<(), SessionError> {
            Err(SessionError::Store {
                message: "disk full".to_string(),
            })
        }
    }

    #[test]
    fn test_failed_logout_keeps_session() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let store = Arc::new(NoRemoveStore(MemoryStore::new()));
        let mut resolver = SessionResolver::new(catalog.clone(), store.clone()).unwrap();
        resolver.quick_login(Role::Admin).unwrap();

        assert!(matches!(resolver.logout(), Err(SessionError::Store { .. })));
        assert_eq!(resolver.role(), Some(Role::Admin));

        // Memory and store still agree
        let restored = SessionResolver::new(catalog, store).unwrap();
        assert_eq!(restored.current(), resolver.current());
    }

    #[test]
    fn test_session_restored_by_new_resolver() {
        let (catalog, store, mut resolver) = setup();
        resolver.quick_login(Role::Faculty).unwrap();

        let restored = SessionResolver::new(catalog, store).unwrap();
        assert_eq!(restored.current(), resolver.current());
    }

    #[test]
    fn test_restore_trusts_persisted_entry() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                SESSION_KEY,
                r#"{"id":"x-9","name":"Someone","email":"x@y.z","role":"admin"}"#,
            )
            .unwrap();

        let resolver = SessionResolver::new(catalog, store).unwrap();
        let user = resolver.current().unwrap();
        assert_eq!(user.id, "x-9");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_malformed_entry_is_discarded() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let store = Arc::new(MemoryStore::new());
        store.set(SESSION_KEY, r#"{"id":"x-9","role":"janitor"}"#).unwrap();

        let resolver = SessionResolver::new(catalog, store.clone()).unwrap();
        assert!(!resolver.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn test_independent_resolvers() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let mut a = SessionResolver::new(catalog.clone(), Arc::new(MemoryStore::new())).unwrap();
        let b = SessionResolver::new(catalog, Arc::new(SqliteStore::open_in_memory().unwrap())).unwrap();

        a.quick_login(Role::Student).unwrap();
        assert!(a.is_authenticated());
        assert!(!b.is_authenticated());
    }
}
