//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and submission flow and delegates
//! rendering details to `components`.

pub mod add_item;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod password_recovery;
pub mod register;

use leptos::prelude::*;

use crate::services::form_result::FormResult;
use crate::state::form::FormState;

/// Run one form submission: mark `form` pending, await `call`, store its
/// result, and run `on_success` when it succeeded.
///
/// A submit while another is in flight is ignored.
pub(crate) fn submit_form<Fut, F>(form: RwSignal<FormState>, call: Fut, on_success: F)
where
    Fut: Future<Output = FormResult> + 'static,
    F: FnOnce() + 'static,
{
    if !form.try_update(FormState::begin).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = call.await;
        let succeeded = result.is_success();
        form.update(|f| f.finish(result));
        if succeeded {
            on_success();
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (call, on_success);
}
