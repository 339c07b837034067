use std::{cell::RefCell, rc::Rc};

use crate::utils::storage as storage_utils;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Page-navigation side effects, kept behind a trait so that auth-failure
/// handling can run without a browser.
pub trait Navigator {
    fn redirect_to_login(&self);
    fn go_to_dashboard(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect_to_login(&self) {
        if storage_utils::current_pathname().as_deref() == Some(LOGIN_PATH) {
            return;
        }
        if let Err(err) = storage_utils::set_location(LOGIN_PATH) {
            log::error!("{err}");
        }
    }

    fn go_to_dashboard(&self) {
        if let Err(err) = storage_utils::set_location(DASHBOARD_PATH) {
            log::error!("{err}");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Dashboard,
}

/// Remembers every redirect instead of performing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    redirects: Rc<RefCell<Vec<Redirect>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> Vec<Redirect> {
        self.redirects.borrow().clone()
    }

    pub fn login_redirects(&self) -> usize {
        self.redirects
            .borrow()
            .iter()
            .filter(|r| **r == Redirect::Login)
            .count()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.borrow_mut().push(Redirect::Login);
    }

    fn go_to_dashboard(&self) {
        self.redirects.borrow_mut().push(Redirect::Dashboard);
    }
}
