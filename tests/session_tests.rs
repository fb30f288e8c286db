// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pitaka::session::Session;
use pitaka::store::{transactions_key, KeyValueStore, SqliteStore, CURRENT_USER_KEY};
use pitaka::{cli, commands::login, commands::transactions, db};
use tempfile::tempdir;

fn open(path: &std::path::Path) -> Session<SqliteStore> {
    let conn = db::open_or_init(path).unwrap();
    Session::open(SqliteStore::new(conn)).unwrap()
}

fn login_with(session: &mut Session<SqliteStore>, email: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(["pitaka", "login", "--email", email]);
    if let Some(("login", sub)) = matches.subcommand() {
        login::login(session, sub)
    } else {
        panic!("no login subcommand");
    }
}

#[test]
fn login_rejects_non_gmail() {
    let dir = tempdir().unwrap();
    let mut session = open(&dir.path().join("pitaka.sqlite"));
    let err = login_with(&mut session, "juan@yahoo.com").unwrap_err();
    assert!(err.to_string().contains("Gmail"));
    assert!(session.current_user().is_none());
    assert!(session.store().get(CURRENT_USER_KEY).unwrap().is_none());
}

#[test]
fn session_survives_reopen_and_logout_keeps_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("pitaka.sqlite");

    let mut session = open(&path);
    login_with(&mut session, "juan@gmail.com").unwrap();
    let matches = cli::build_cli().get_matches_from([
        "pitaka", "tx", "add", "--category", "Food", "--amount", "150.5",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(&mut session, tx_m).unwrap();
    }
    drop(session);

    let mut session = open(&path);
    assert_eq!(session.current_user().unwrap().email, "juan@gmail.com");
    assert_eq!(session.transactions().unwrap()[0].amount, 150.5);

    login::logout(&mut session).unwrap();
    assert!(session.current_user().is_none());
    drop(session);

    let mut session = open(&path);
    assert!(session.current_user().is_none());
    assert!(session
        .store()
        .get(&transactions_key("juan@gmail.com"))
        .unwrap()
        .is_some());
    login_with(&mut session, "juan@gmail.com").unwrap();
    assert_eq!(session.transactions().unwrap().len(), 1);
}
