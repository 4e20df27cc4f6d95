use super::load_pipeline;
use crate::error::AppError;
use crate::models::config::UserConfig;

pub async fn print_tags(user_config: &UserConfig) -> Result<(), AppError> {
    let pipeline = load_pipeline(user_config).await?;
    if pipeline.tags.is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    for tag in pipeline.tags.iter() {
        println!("{}", tag);
    }
    eprintln!("{} tag(s)", pipeline.tags.len());
    Ok(())
}
