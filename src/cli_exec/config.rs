use super::*;

pub(super) fn handle_config_command(ctx: &CliContext, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            if json {
                print_json(&ctx.config, "config json")?;
            } else {
                println!("state_dir: {}", ctx.state.root().display());
                println!(
                    "session_file: {}",
                    ctx.state.session_store().path().display()
                );
                println!(
                    "api_url: {}",
                    ctx.config.api_url.as_deref().unwrap_or("(not set)")
                );
                println!(
                    "log_filter: {}",
                    ctx.config.log_filter.as_deref().unwrap_or("(default)")
                );
            }
        }
        ConfigCommands::Set {
            api_url,
            log_filter,
        } => {
            if api_url.is_none() && log_filter.is_none() {
                anyhow::bail!("nothing to set (pass --api-url and/or --log-filter)");
            }
            let mut cfg = ctx.config.clone();
            if let Some(url) = api_url {
                let url = url.trim().to_string();
                if url.is_empty() {
                    anyhow::bail!("api url must not be empty");
                }
                cfg.api_url = Some(url);
            }
            if let Some(filter) = log_filter {
                cfg.log_filter = Some(filter).filter(|f| !f.trim().is_empty());
            }
            ctx.state.write_config(&cfg)?;
            tracing::info!("config updated");
            println!("Saved {}", ctx.state.root().join("config.json").display());
        }
    }

    Ok(())
}
