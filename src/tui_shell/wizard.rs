mod instance_flow;
mod login_flow;
mod reset_flow;
mod types;
mod validate;

pub(super) use types::{
    AddInstanceWizard, EditInstanceWizard, ForgotWizard, LoginWizard, ResetWizard,
};
