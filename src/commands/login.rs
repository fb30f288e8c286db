// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::store::KeyValueStore;
use crate::utils::required;
use anyhow::Result;

pub fn login<S: KeyValueStore>(session: &mut Session<S>, sub: &clap::ArgMatches) -> Result<()> {
    let email = required(sub, "email")?.trim();
    let user = session.sign_in(email)?;
    println!("Signed in as {}", user.email);
    let count = session.transactions()?.len();
    println!("{} transaction(s) on file", count);
    Ok(())
}

pub fn logout<S: KeyValueStore>(session: &mut Session<S>) -> Result<()> {
    match session.sign_out()? {
        Some(user) => println!("Signed out {}", user.email),
        None => println!("Not signed in"),
    }
    Ok(())
}

pub fn whoami<S: KeyValueStore>(session: &Session<S>) -> Result<()> {
    match session.current_user() {
        Some(user) => println!("{} (since {})", user.email, user.login_date.to_rfc3339()),
        None => println!("Not signed in"),
    }
    Ok(())
}
