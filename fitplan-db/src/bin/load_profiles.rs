use std::{env, error::Error, fs::File, io::BufReader};

use fitplan_db::{
    profile::{ProfileRepository, ProfileRepositoryImpl, StoredProfile},
    Connection,
};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let log_config = env::var("LOG_CONFIG").unwrap_or_else(|_| "log4rs.yml".to_owned());
    log4rs::init_file(log_config, Default::default())?;

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/profiles.json".to_owned());
    let file = File::open(&path)?;
    let profiles: Vec<StoredProfile> = serde_json::from_reader(BufReader::new(file))?;

    info!("Connecting to database");
    let conn = Connection::establish().await?;
    let profile_repository = ProfileRepositoryImpl::new(conn);

    info!("Storing {} profiles from {}", profiles.len(), path);
    profile_repository.store_profiles(profiles).await?;

    Ok(())
}
