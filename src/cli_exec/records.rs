use adconsole::editor::{FlatAdsEditor, GridAdsEditor, PostsEditor};
use adconsole::model::RecordId;

use super::*;

/// A failed load already replaced the list; surface the operator message.
fn ensure_loaded(error: Option<&str>) -> Result<()> {
    match error {
        Some(msg) => anyhow::bail!(msg.to_string()),
        None => Ok(()),
    }
}

pub(super) fn handle_flat_command(ctx: &CliContext, command: FlatCommands) -> Result<()> {
    let client = ctx.client()?;
    require_session(ctx, &client)?;

    let mut editor = FlatAdsEditor::new();
    editor.load(&client);
    ensure_loaded(editor.repo().error())?;

    match command {
        FlatCommands::List { json } => {
            if json {
                print_json(&editor.records(), "flat ads json")?;
            } else if editor.records().is_empty() {
                println!("No flat ads available.");
            } else {
                for ad in editor.records() {
                    println!("{}\t{}", ad.id, ad.title);
                }
            }
        }
        FlatCommands::Set { id, title } => {
            // The loaded record carries the id in its wire form.
            let id = editor
                .repo()
                .find(&RecordId::parse_input(&id))
                .map(|ad| ad.id.clone())
                .with_context(|| format!("no flat ad with id {}", id))?;
            editor.select(&id);
            editor.set_draft(&id, title);
            report_notice(editor.save(&client, &id))?;
        }
    }

    Ok(())
}

pub(super) fn handle_grid_command(ctx: &CliContext, command: GridCommands) -> Result<()> {
    let client = ctx.client()?;
    require_session(ctx, &client)?;

    let mut editor = GridAdsEditor::new();
    editor.load(&client);
    ensure_loaded(editor.repo().error())?;

    match command {
        GridCommands::Groups { json } => {
            let groups = editor.groups();
            if json {
                print_json(&groups, "grid groups json")?;
            } else {
                for g in groups {
                    println!("{}", g);
                }
            }
        }
        GridCommands::Show { group, json } => {
            if !editor.groups().contains(&group.as_str()) {
                anyhow::bail!("no grid group named {}", group);
            }
            editor.select_group(&group);
            let members = editor.displayed();
            if json {
                print_json(&members, "grid members json")?;
            } else {
                for ad in members {
                    println!("{}\t{}", ad.id, ad.title);
                }
            }
        }
        GridCommands::Set { id, title } => {
            let id = editor
                .repo()
                .find(&RecordId::parse_input(&id))
                .map(|ad| ad.id.clone())
                .with_context(|| format!("no grid ad with id {}", id))?;
            editor.set_draft(&id, title);
            report_notice(editor.save(&client, &id))?;
        }
    }

    Ok(())
}

pub(super) fn handle_posts_command(ctx: &CliContext, command: PostsCommands) -> Result<()> {
    let client = ctx.client()?;
    require_session(ctx, &client)?;

    let mut editor = PostsEditor::new();
    editor.load(&client);
    ensure_loaded(editor.repo().error())?;

    match command {
        PostsCommands::List { search, json } => {
            let posts = match search {
                Some(q) => {
                    editor.search.set_query(q);
                    editor.search_results()
                }
                None => editor.records().iter().collect(),
            };
            if json {
                print_json(&posts, "posts json")?;
            } else if posts.is_empty() && editor.search.is_active() {
                println!("No results found.");
            } else {
                for p in posts {
                    println!("{}\t{}\t{}", p.id, p.title, p.image_url);
                }
            }
        }
        PostsCommands::SetImage { id, url } => {
            let id = editor
                .repo()
                .find(&RecordId::parse_input(&id))
                .map(|p| p.id.clone())
                .with_context(|| format!("no post with id {}", id))?;
            editor.select(&id);
            editor.set_url_draft(url);
            report_notice(editor.save(&client))?;
        }
    }

    Ok(())
}
