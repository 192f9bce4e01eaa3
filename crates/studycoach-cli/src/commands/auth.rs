//! Account subcommand over the credential store.

use clap::Subcommand;
use studycoach_core::auth;
use studycoach_core::state::StateStore;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Create an account and sign in
    Signup {
        /// Display name
        name: String,
        /// Email address
        email: String,
        /// Password
        password: String,
    },
    /// Sign in to an existing account
    Login {
        /// Email address
        email: String,
        /// Password
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in account
    Whoami,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = StateStore::open_default();
    match action {
        AuthAction::Signup { name, email, password } => {
            let user = auth::sign_up(&mut store, &name, &email, &password)?;
            println!("signed up as {} <{}>", user.name, user.email);
        }
        AuthAction::Login { email, password } => {
            let user = auth::sign_in(&mut store, &email, &password)?;
            println!("signed in as {} <{}>", user.name, user.email);
        }
        AuthAction::Logout => {
            auth::sign_out(&mut store);
            println!("signed out");
        }
        AuthAction::Whoami => match auth::current_user(&store) {
            Some(user) => println!("{} <{}>", user.name, user.email),
            None => println!("not signed in"),
        },
    }
    Ok(())
}
