use anyhow::{Result, bail};

use shopdesk_runtime::{Credentials, LoginOutcome, Session, SessionStore};

use crate::context::HandlerContext;

pub fn login(ctx: &HandlerContext, credentials: Credentials) -> Result<()> {
    let api = ctx.api()?;
    let mut session = Session::restore(Box::new(ctx.session_store()));

    match ctx.runtime()?.block_on(session.login(&api, &credentials)) {
        LoginOutcome::Success => {
            println!("Signed in to {}", ctx.config().api_base);
            Ok(())
        }
        LoginOutcome::Failure(reason) => bail!("Login failed: {}", reason),
    }
}

pub fn logout(ctx: &HandlerContext) -> Result<()> {
    let store = ctx.session_store();
    let was_signed_in = store.load();
    store.clear()?;
    if was_signed_in {
        println!("Signed out");
    } else {
        println!("No stored session");
    }
    Ok(())
}
