use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::content_io::{self, discover_content, load_content};
use crate::model::Content;
use crate::ops::check;
use crate::ops::filter::{ALL_TAG, filter_projects, tag_universe};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let content_path = cli.content.as_ref().map(PathBuf::from);

    match cli.command {
        // No subcommand launches the TUI; main handles that branch.
        None => Ok(()),
        Some(cmd) => match cmd {
            // Init writes the starter file and never loads content
            Commands::Init(args) => cmd_init(args),

            Commands::Projects(args) => {
                cmd_projects(args, &load_cwd(content_path.as_deref())?, json)
            }
            Commands::Tags => cmd_tags(&load_cwd(content_path.as_deref())?, json),
            Commands::Skills => cmd_skills(&load_cwd(content_path.as_deref())?, json),
            Commands::Profile => cmd_profile(&load_cwd(content_path.as_deref())?, json),
            Commands::Check => cmd_check(&load_cwd(content_path.as_deref())?, json),
        },
    }
}

/// Load content for CLI commands: explicit path, upward walk, or the
/// embedded starter data.
fn load_cwd(explicit: Option<&Path>) -> Result<Content, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let source = discover_content(&cwd, explicit)?;
    Ok(load_content(&source)?)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let path = content_io::init_content(&cwd, args.force)?;
    println!("wrote {}", path.display());
    println!("run `folio` in this directory to view it");
    Ok(())
}

fn cmd_projects(
    args: ProjectsArgs,
    content: &Content,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.query.as_deref().unwrap_or("");
    let tag = args.tag.as_deref().unwrap_or(ALL_TAG);
    let projects = filter_projects(&content.projects, query, tag);

    if json {
        let out = ProjectListJson {
            query: args.query.as_deref(),
            tag,
            count: projects.len(),
            projects,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("no matches");
        return Ok(());
    }
    for project in projects {
        println!("{}  {}", project.id, project.title);
        if !project.description.is_empty() {
            println!("    {}", project.description);
        }
        if !project.tags.is_empty() {
            let tags: Vec<String> = project.tags.iter().map(|t| format!("#{}", t)).collect();
            println!("    {}", tags.join(" "));
        }
    }
    Ok(())
}

fn cmd_tags(content: &Content, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tags = tag_universe(&content.projects);
    if json {
        println!("{}", serde_json::to_string_pretty(&TagsJson { tags })?);
    } else {
        for tag in tags {
            println!("{}", tag);
        }
    }
    Ok(())
}

fn cmd_skills(content: &Content, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = SkillsJson {
            skills: &content.skills,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for group in &content.skills {
            println!("{}:", group.group);
            for item in &group.items {
                println!("  {}", item);
            }
        }
    }
    Ok(())
}

fn cmd_profile(content: &Content, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let profile = &content.profile;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ProfileJson { profile })?
        );
        return Ok(());
    }

    println!("{}", profile.name);
    if !profile.title.is_empty() {
        println!("{}", profile.title);
    }
    if !profile.location.is_empty() {
        println!("{}", profile.location);
    }
    if !profile.tagline.is_empty() {
        println!();
        println!("{}", profile.tagline);
    }
    for paragraph in &profile.bio {
        println!();
        println!("{}", paragraph);
    }
    if !profile.links.is_empty() {
        println!();
        for (kind, url) in &profile.links {
            println!("{:<10}{}", kind, url);
        }
    }
    Ok(())
}

fn cmd_check(content: &Content, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = check::check_content(content);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in check::format_check_result(&result) {
            println!("{}", line);
        }
    }

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}
