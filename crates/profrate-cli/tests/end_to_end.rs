use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use profrate::cli::seeder::seed_demo_catalog;
use profrate::router::init_router;
use profrate::state::AppState;
use profrate_cli::{ApiClient, Prompter, Session};
use profrate_config::{CorsConfig, DatabaseConfig, RatingConfig};
use profrate_db::{init_db_pool, run_migrations};
use reqwest::StatusCode;

/// Serves a freshly seeded in-memory database on an ephemeral port and
/// returns its base URL.
fn spawn_server() -> String {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let config = DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                busy_timeout_secs: 5,
            };
            let pool = init_db_pool(&config).await.unwrap();
            run_migrations(&pool).await.unwrap();
            seed_demo_catalog(&pool, &RatingConfig::default())
                .await
                .unwrap();

            let state = AppState {
                db: pool,
                rating_config: RatingConfig::default(),
                cors_config: CorsConfig::default(),
            };

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, init_router(state)).await.unwrap();
        });
    });

    let addr = rx.recv().unwrap();
    format!("http://{}", addr)
}

struct Scripted {
    username: &'static str,
    password: &'static str,
    email: &'static str,
}

impl Prompter for Scripted {
    fn text(&mut self, label: &str, _: &mut dyn BufRead, _: &mut dyn Write) -> io::Result<String> {
        match label {
            "Enter email" => Ok(self.email.to_string()),
            _ => Ok(self.username.to_string()),
        }
    }

    fn secret(&mut self, _: &str, _: &mut dyn BufRead, _: &mut dyn Write) -> io::Result<String> {
        Ok(self.password.to_string())
    }
}

#[test]
fn test_register_login_rate_and_average_through_the_repl() {
    let base_url = spawn_server();
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let prompter = Scripted {
        username: "alice",
        password: "s3cret",
        email: "alice@example.com",
    };
    let mut session = Session::new(client, prompter);

    let script = format!(
        "login {base}\nregister\nlogin {base}\nrate JE1 CD1 2017 1 4\naverage JE1 CD1\nview\nlist\nlogout\nrate JE1 CD1 2017 1 4\nexit\n",
        base = base_url
    );
    let mut output = Vec::new();
    session.run(script.as_bytes(), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Login failed: Invalid username or password."));
    assert!(output.contains("User registered successfully!"));
    assert!(output.contains("Login successful!"));
    assert!(output.contains("Rating submitted successfully!"));
    assert!(output.contains(
        "Professor J. Excellent (JE1) in module Computing for Dummies (CD1) has an average rating of 4."
    ));
    assert!(output.contains("- Professor J. Excellent (ID: JE1) has an average rating of 4"));
    assert!(output.contains("- CD1, Computing for Dummies | Year: 2017, Semester: 1"));
    assert!(output.contains("Logout successful!"));
    assert!(output.contains("You must be logged in to rate a professor."));
    assert!(output.ends_with("Exiting...\n"));
    assert!(!session.client().is_logged_in());
}

#[test]
fn test_client_reports_server_errors() {
    let base_url = spawn_server();
    let mut client = ApiClient::new(&base_url).unwrap();

    let response = client.average("JE1", "PG1").unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.error_message(),
        "No ratings found for this professor in this module."
    );

    let response = client.average("XX9", "CD1").unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "Professor not found.");

    let response = client.register("bob", "pw", "bob@example.com").unwrap();
    assert_eq!(response.status, StatusCode::CREATED);
    let response = client.login("bob", "pw").unwrap();
    assert_eq!(response.status, StatusCode::OK);
    let token = client.token().map(str::to_string);
    assert!(token.is_some());

    let response = client.rate("JE1", "CD1", "2017", "2", "4").unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "Module instance not found.");

    let response = client.rate("JE1", "CD1", "twenty", "1", "4").unwrap();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error_message(),
        "Invalid year format. Must be a number."
    );

    let response = client.login("bob", "pw").unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(client.token().map(str::to_string), token);

    let response = client.logout().unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert!(client.token().is_none());
}
