use anyhow::Result;
use roomlog_service::ObservationService;
use roomlog_storage::FileBlobStore;
use std::path::Path;

fn open_service(data_dir: &Path) -> Result<ObservationService<FileBlobStore>> {
    Ok(ObservationService::open(FileBlobStore::new(data_dir))?)
}

pub(crate) fn run_add(data_dir: &Path, room_id: &str, text: &str) -> Result<()> {
    let mut service = open_service(data_dir)?;
    let observation = service.add_observation(Some(room_id), text)?;
    println!("{}", serde_json::to_string_pretty(&observation)?);
    Ok(())
}

pub(crate) fn run_remove(data_dir: &Path, room_id: &str, observation_id: &str) -> Result<()> {
    let mut service = open_service(data_dir)?;
    match service.delete_observation(room_id, observation_id)? {
        Some(obs) => println!("{}", serde_json::to_string_pretty(&obs)?),
        None => println!("Observation not found: {observation_id}"),
    }
    Ok(())
}

pub(crate) fn run_list(data_dir: &Path, room_id: Option<&str>) -> Result<()> {
    let service = open_service(data_dir)?;
    match room_id {
        Some(room_id) => {
            println!("{}", serde_json::to_string_pretty(service.observations(room_id))?);
        },
        None => println!("{}", serde_json::to_string_pretty(service.store())?),
    }
    Ok(())
}

pub(crate) fn run_clear(data_dir: &Path) -> Result<()> {
    let mut service = open_service(data_dir)?;
    if service.clear()? {
        println!("Cleared all observations");
    } else {
        println!("Nothing to clear");
    }
    Ok(())
}
