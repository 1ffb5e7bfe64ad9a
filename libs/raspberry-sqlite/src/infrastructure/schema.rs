//! Table definitions, applied on every open

pub(crate) const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    year TEXT NOT NULL,
    title TEXT NOT NULL,
    studios TEXT NOT NULL,
    producers TEXT NOT NULL,
    winner TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS producer_awards (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    producer TEXT NOT NULL,
    interval_years INTEGER NOT NULL,
    previous_win INTEGER NOT NULL,
    following_win INTEGER NOT NULL,
    category TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_producer_awards_category ON producer_awards (category);
";
