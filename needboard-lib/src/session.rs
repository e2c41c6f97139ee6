//! The state container a front-end owns for its lifetime.

use tracing::{debug, warn};

use crate::{
    Result,
    storage::Storage,
    store::{NeedDraft, RecordStore},
    view::{LoginOutcome, View, ViewController},
};

/// Shown when the admin key doesn't match
pub const INVALID_KEY: &str = "Chave de acesso inválida!";
/// Asked before a record is removed
pub const CONFIRM_DELETE: &str = "Tem certeza que deseja remover este item?";

/// Blocking yes/no and alert facilities supplied by the front-end.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;

    fn notify(&self, message: &str);
}

/// Everything a front-end can ask the session to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Navigate(View),
    /// The "restricted area" / "back to site" button
    ToggleRestricted,
    /// The brand element
    GoHome,
    PasswordChanged(String),
    SubmitLogin,
    AddRecord(NeedDraft),
    DeleteRecord(String),
    OpenDonation,
    CloseDonation,
}

/// Owns the record store, the screen state and the donation overlay flag.
///
/// Every [`Intent`] runs to completion inside [`Session::dispatch`]; front-ends redraw from the
/// session's state afterwards.
#[derive(Debug)]
pub struct Session {
    store: RecordStore,
    views: ViewController,
    donation_open: bool,
}

impl Session {
    /// Load the records from `storage` and start at the public listing.
    pub fn open(storage: Box<dyn Storage>) -> Result<Self> {
        Ok(Self {
            store: RecordStore::load(storage)?,
            views: ViewController::new(),
            donation_open: false,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn views(&self) -> &ViewController {
        &self.views
    }

    pub fn view(&self) -> View {
        self.views.view()
    }

    pub fn donation_open(&self) -> bool {
        self.donation_open
    }

    pub fn dispatch(&mut self, intent: Intent, prompt: &dyn Prompt) -> Result<()> {
        match intent {
            Intent::Navigate(view) => {
                self.views.navigate(view);
            }
            Intent::ToggleRestricted => self.views.toggle_restricted(),
            Intent::GoHome => self.views.go_home(),
            Intent::PasswordChanged(password) => self.views.set_password(password),
            Intent::SubmitLogin => match self.views.submit_login() {
                LoginOutcome::Accepted => debug!("Admin unlocked"),
                LoginOutcome::Rejected => prompt.notify(INVALID_KEY),
                LoginOutcome::NotPrompting => warn!("Login submitted outside the login prompt"),
            },
            Intent::AddRecord(draft) => {
                if self.require_admin("add") {
                    self.store.add(draft)?;
                    self.views.go_home();
                }
            }
            Intent::DeleteRecord(id) => {
                if self.require_admin("delete") && prompt.confirm(CONFIRM_DELETE) {
                    self.store.remove(&id)?;
                }
            }
            Intent::OpenDonation => self.donation_open = true,
            Intent::CloseDonation => self.donation_open = false,
        }

        Ok(())
    }

    fn require_admin(&self, action: &str) -> bool {
        let admin = self.views.view() == View::Admin;
        if !admin {
            warn!("Ignoring {action} outside the admin panel");
        }
        admin
    }
}

#[cfg(test)]
mod test {
    use std::cell::{Cell, RefCell};

    use crate::{
        storage::{Db, testing::RecordingStorage},
        store::STORAGE_KEY,
    };

    use super::*;

    /// Answers confirmations from a script and records every call.
    #[derive(Default)]
    struct ScriptedPrompt {
        answer: Cell<bool>,
        confirmed: RefCell<Vec<String>>,
        notified: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer: Cell::new(answer),
                ..Default::default()
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.confirmed.borrow_mut().push(message.into());
            self.answer.get()
        }

        fn notify(&self, message: &str) {
            self.notified.borrow_mut().push(message.into());
        }
    }

    fn mock() -> (Session, Db) {
        let db = Db::in_memory().unwrap();
        let session = Session::open(Box::new(db.clone())).unwrap();
        (session, db)
    }

    fn login(session: &mut Session, prompt: &ScriptedPrompt, password: &str) {
        session.dispatch(Intent::ToggleRestricted, prompt).unwrap();
        session
            .dispatch(Intent::PasswordChanged(password.into()), prompt)
            .unwrap();
        session.dispatch(Intent::SubmitLogin, prompt).unwrap();
    }

    #[test]
    fn test_open() {
        let (session, _db) = mock();

        assert_eq!(session.view(), View::Listing);
        assert!(session.store().is_empty());
        assert!(!session.donation_open());
    }

    #[test]
    fn test_login() {
        let (mut session, _db) = mock();
        let prompt = ScriptedPrompt::default();

        login(&mut session, &prompt, "SaoMateus2025");

        assert_eq!(session.view(), View::Admin);
        assert_eq!(session.views().password(), "");
        assert!(prompt.notified.borrow().is_empty());
    }

    #[test]
    fn test_failed_login_notifies() {
        let (mut session, _db) = mock();
        let prompt = ScriptedPrompt::default();

        login(&mut session, &prompt, "SAOMATEUS2026");

        assert_eq!(session.view(), View::Login);
        assert_eq!(session.views().password(), "SAOMATEUS2026");
        assert_eq!(*prompt.notified.borrow(), [INVALID_KEY]);

        // Retrying is allowed
        session
            .dispatch(Intent::PasswordChanged("saomateus2025".into()), &prompt)
            .unwrap();
        session.dispatch(Intent::SubmitLogin, &prompt).unwrap();

        assert_eq!(session.view(), View::Admin);
    }

    #[test]
    fn test_add_returns_to_listing() {
        let (mut session, _db) = mock();
        let prompt = ScriptedPrompt::default();
        login(&mut session, &prompt, "saomateus2025");

        session
            .dispatch(
                Intent::AddRecord(NeedDraft::new("Andador", "andador.png")),
                &prompt,
            )
            .unwrap();

        assert_eq!(session.store().len(), 1);
        assert_eq!(session.view(), View::Listing);
    }

    #[test]
    fn test_add_requires_admin() {
        let (mut session, _db) = mock();
        let prompt = ScriptedPrompt::default();

        session
            .dispatch(Intent::AddRecord(NeedDraft::new("Andador", "")), &prompt)
            .unwrap();

        assert!(session.store().is_empty());
    }

    #[test]
    fn test_delete_confirmed() {
        let (mut session, db) = mock();
        let prompt = ScriptedPrompt::answering(true);
        login(&mut session, &prompt, "saomateus2025");
        session
            .dispatch(Intent::AddRecord(NeedDraft::new("Sabonete", "")), &prompt)
            .unwrap();
        login(&mut session, &prompt, "saomateus2025");

        let id = session.store().records().first().unwrap().id().clone();
        session.dispatch(Intent::DeleteRecord(id), &prompt).unwrap();

        assert!(session.store().is_empty());
        assert_eq!(*prompt.confirmed.borrow(), [CONFIRM_DELETE]);
        assert_eq!(db.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_delete_declined() {
        let (mut session, _db) = mock();
        let prompt = ScriptedPrompt::answering(true);
        login(&mut session, &prompt, "saomateus2025");
        session
            .dispatch(Intent::AddRecord(NeedDraft::new("Sabonete", "")), &prompt)
            .unwrap();
        login(&mut session, &prompt, "saomateus2025");

        prompt.answer.set(false);
        let id = session.store().records().first().unwrap().id().clone();
        session.dispatch(Intent::DeleteRecord(id), &prompt).unwrap();

        assert_eq!(session.store().len(), 1);
        assert_eq!(prompt.confirmed.borrow().len(), 1);
    }

    #[test]
    fn test_failed_add_leaves_store_untouched() {
        let storage = RecordingStorage::new();
        let mut session = Session::open(Box::new(storage.clone())).unwrap();
        let prompt = ScriptedPrompt::default();
        login(&mut session, &prompt, "saomateus2025");

        storage.fail_writes(true);
        let result = session.dispatch(
            Intent::AddRecord(NeedDraft::new("Wheelchair", "x.jpg")),
            &prompt,
        );

        assert!(result.is_err());
        assert!(session.store().is_empty());
        assert_eq!(session.view(), View::Admin);
        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_failed_delete_keeps_record() {
        let storage = RecordingStorage::new();
        let mut session = Session::open(Box::new(storage.clone())).unwrap();
        let prompt = ScriptedPrompt::answering(true);
        login(&mut session, &prompt, "saomateus2025");
        session
            .dispatch(Intent::AddRecord(NeedDraft::new("Sabonete", "")), &prompt)
            .unwrap();
        login(&mut session, &prompt, "saomateus2025");
        let id = session.store().records().first().unwrap().id().clone();

        storage.fail_writes(true);

        assert!(session.dispatch(Intent::DeleteRecord(id.clone()), &prompt).is_err());
        assert!(session.store().get(&id).is_some());
    }

    #[test]
    fn test_donation_overlay_is_independent() {
        let (mut session, _db) = mock();
        let prompt = ScriptedPrompt::default();

        session.dispatch(Intent::OpenDonation, &prompt).unwrap();
        session.dispatch(Intent::ToggleRestricted, &prompt).unwrap();

        assert!(session.donation_open());
        assert_eq!(session.view(), View::Login);

        session.dispatch(Intent::CloseDonation, &prompt).unwrap();

        assert!(!session.donation_open());
        assert_eq!(session.view(), View::Login);
    }

    #[test]
    fn test_reopen_starts_at_listing() {
        let (mut session, db) = mock();
        let prompt = ScriptedPrompt::default();
        login(&mut session, &prompt, "saomateus2025");

        let reopened = Session::open(Box::new(db)).unwrap();

        assert_eq!(reopened.view(), View::Listing);
    }
}
