pub const CREATE_PROFILES: &str = "CREATE TABLE IF NOT EXISTS profiles (
    user_id TEXT PRIMARY KEY NOT NULL,
    name TEXT,
    email TEXT,
    weight REAL,
    height REAL,
    age INTEGER,
    gender TEXT
);";

pub const SELECT_PROFILE: &str =
    "SELECT name, email, weight, height, age, gender FROM profiles WHERE user_id = ?";

pub const UPSERT_PROFILE: &str = "INSERT OR REPLACE INTO profiles
    (user_id, name, email, weight, height, age, gender)
    VALUES (?, ?, ?, ?, ?, ?, ?)";
