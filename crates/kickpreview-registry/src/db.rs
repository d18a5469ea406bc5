//! Track repository and database setup.

use kickpreview_core::{AppError, Config, TrackRecord};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// One row of the `tracks` table.
#[derive(Debug, sqlx::FromRow)]
pub struct TrackRow {
    pub title: String,
    pub audio_content_uri: String,
    pub image_content_uri: String,
    pub link: String,
}

impl From<TrackRow> for TrackRecord {
    fn from(row: TrackRow) -> Self {
        TrackRecord {
            title: row.title,
            audio_uri: row.audio_content_uri,
            image_uri: row.image_content_uri,
            link: row.link,
        }
    }
}

/// Connect to the registry database and apply pending migrations.
pub async fn setup_database(config: &Config) -> Result<MySqlPool, anyhow::Error> {
    let url = config.database_url()?;
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!(
        database = %config.mariadb_database,
        host = %config.mariadb_host,
        "Database ready"
    );
    Ok(pool)
}

/// Data access for track records.
#[derive(Clone)]
pub struct TrackRepository {
    pool: MySqlPool,
}

impl TrackRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// One track chosen pseudo-randomly by the database, or `None` when the
    /// table is empty.
    pub async fn random_track(&self) -> Result<Option<TrackRecord>, AppError> {
        let row: Option<TrackRow> = sqlx::query_as(
            "SELECT title, audio_content_uri, image_content_uri, link \
             FROM tracks ORDER BY RAND() LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TrackRecord::from))
    }

    /// Insert a registered track. The registry owns the record's lifecycle
    /// from this point on.
    pub async fn insert_track(&self, record: &TrackRecord) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO tracks (title, audio_content_uri, image_content_uri, link) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&record.title)
        .bind(&record.audio_uri)
        .bind(&record.image_uri)
        .bind(&record.link)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_to_record() {
        let row = TrackRow {
            title: "Artist - Track".to_string(),
            audio_content_uri: "s3://bucket/audios/kick.wav".to_string(),
            image_content_uri: "s3://bucket/images/cover.png".to_string(),
            link: "http://example.com/track".to_string(),
        };
        let record = TrackRecord::from(row);
        assert_eq!(record.audio_uri, "s3://bucket/audios/kick.wav");
        assert_eq!(record.image_uri, "s3://bucket/images/cover.png");
        assert_eq!(record.title, "Artist - Track");
    }
}
