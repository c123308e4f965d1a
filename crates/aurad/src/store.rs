//! SQLite-backed storage for users and the QA bank.
//!
//! One connection behind a mutex; queries are short and the daemon's write
//! volume is tiny (registrations only), so a single connection is plenty.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Starter rows inserted when the QA bank is empty.
const SEED_QA: &[(&str, &str)] = &[
    (
        "What is Rust?",
        "Rust is a systems programming language focused on safety and speed.",
    ),
    (
        "What is a variable?",
        "A variable is a named storage location that holds a value.",
    ),
    (
        "What is a function?",
        "A function is a reusable block of code that performs one task.",
    ),
    (
        "What is a loop?",
        "A loop repeats a block of code until a condition is met.",
    ),
    (
        "What is recursion?",
        "Recursion is a function calling itself to solve smaller subproblems.",
    ),
];

/// Store backed by SQLite
pub struct AuraStore {
    conn: Arc<Mutex<Connection>>,
}

impl AuraStore {
    /// Open or create the store at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {:?}", path))?;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        store.init_schema()?;
        Ok(store)
    }

    /// In-memory store for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS qa_bank (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL
            )
            "#,
            [],
        )?;

        Ok(())
    }

    /// Insert a new user. Returns false if the username is taken.
    pub fn create_user(&self, username: &str, password_hash: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let result = conn.execute(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)",
            params![username, password_hash, chrono::Utc::now().to_rfc3339()],
        );

        match result {
            Ok(_) => Ok(true),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Ok(false)
            }
            Err(e) => Err(anyhow::Error::from(e).context("Failed to insert user")),
        }
    }

    /// Fetch the stored password hash for a username.
    pub fn password_hash(&self, username: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT password_hash FROM users WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )
        .optional()
        .context("Failed to query user")
    }

    /// Substring lookup against the QA bank: first row (in insertion order)
    /// whose question contains the query. Case-sensitive via instr().
    pub fn lookup_answer(&self, question: &str) -> Result<Option<String>> {
        if question.is_empty() {
            return Ok(None);
        }
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT answer FROM qa_bank WHERE instr(question, ?1) > 0 ORDER BY id LIMIT 1",
            params![question],
            |row| row.get(0),
        )
        .optional()
        .context("Failed to query QA bank")
    }

    /// Add a row to the QA bank.
    pub fn insert_qa(&self, question: &str, answer: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO qa_bank (question, answer) VALUES (?1, ?2)",
            params![question, answer],
        )
        .context("Failed to insert QA row")?;
        Ok(())
    }

    /// Number of rows in the QA bank.
    pub fn qa_count(&self) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM qa_bank", [], |row| row.get(0))
            .context("Failed to count QA bank")
    }

    /// Seed the QA bank with starter rows if it is empty.
    pub fn seed_defaults(&self) -> Result<()> {
        if self.qa_count()? > 0 {
            return Ok(());
        }
        for (question, answer) in SEED_QA {
            self.insert_qa(question, answer)?;
        }
        info!("Seeded QA bank with {} starter rows", SEED_QA.len());
        Ok(())
    }
}
