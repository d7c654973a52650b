/// user store - the in-memory records behind the http api
use mortgage_calculator_rs::{NewUser, UserStore, UserUpdate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = UserStore::new();

    let ada = store.create(NewUser {
        name: Some("ada".into()),
        email: Some("ada@example.com".into()),
    })?;
    store.create(NewUser {
        name: Some("bob".into()),
        email: Some("bob@example.com".into()),
    })?;

    store.update(ada.id, UserUpdate {
        name: None,
        email: Some("lovelace@example.com".into()),
    })?;
    store.delete(2)?;

    println!("{}", serde_json::to_string_pretty(store.list())?);
    Ok(())
}
