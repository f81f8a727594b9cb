//! SQL schema for the MySQL store.
//!
//! Executed statement-by-statement at pool startup; idempotent thanks to
//! `CREATE TABLE IF NOT EXISTS`. Timestamps are assigned and refreshed by
//! MySQL itself.

pub const SCHEMA: &[&str] = &[
  "CREATE TABLE IF NOT EXISTS ContactGroups (
     group_id    BIGINT AUTO_INCREMENT PRIMARY KEY,
     group_name  VARCHAR(255) NOT NULL,
     description TEXT,
     created_at  TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
     updated_at  TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
                 ON UPDATE CURRENT_TIMESTAMP,
     UNIQUE KEY group_name_key (group_name)
   )",
  // group_id has no ON DELETE action: group deletion clears member
  // references in a preceding statement.
  "CREATE TABLE IF NOT EXISTS Contacts (
     contact_id BIGINT AUTO_INCREMENT PRIMARY KEY,
     group_id   BIGINT,
     first_name VARCHAR(255) NOT NULL,
     last_name  VARCHAR(255) NOT NULL,
     email      VARCHAR(255),
     phone      VARCHAR(50),
     address    TEXT,
     birthday   DATE,
     created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
     updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
                ON UPDATE CURRENT_TIMESTAMP,
     UNIQUE KEY email_key (email),
     CONSTRAINT contacts_group_fk FOREIGN KEY (group_id)
       REFERENCES ContactGroups (group_id)
   )",
];
