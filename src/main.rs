use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use menu_press::render::{TemplateId, render_menu, render_not_found, MenuPage};
use menu_press::resolve::{MenuAddress, Resolution, resolve};
use menu_press::store::JsonStore;
use menu_press::types::{Branch, Restaurant};
use menu_press::{config, group, output, publish};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "menu-press")]
#[command(about = "Static menu page publisher for multi-branch restaurants")]
#[command(long_about = "\
Static menu page publisher for multi-branch restaurants

A JSON row store (menu-data.json) is the data source: restaurants own
branches, branches own menu items, and each branch picks one of six visual
templates for its public menu page.

Public URL shape:

  {origin}/{restaurant-slug}/{branch-slug}/{template-id}

Slugs are derived from display names (Unicode letters preserved, so Arabic
names work) and recomputed at resolution time — rename a branch and its old
link stops resolving. The legacy name-based form
{origin}/{restaurant-name}/{branch-name}/menu still resolves via
case-insensitive name match.

Run 'menu-press gen-config' to print a documented menu-press.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (defaults to ./menu-press.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one branch's public menu page to HTML
    Render {
        /// Restaurant URL segment (slug, or raw name with --legacy)
        restaurant: String,
        /// Branch URL segment (slug, or raw name with --legacy)
        branch: String,
        /// Template segment of the public URL (informational; rendering
        /// follows the branch's stored template)
        template: Option<String>,
        /// Treat the segments as raw names (legacy /{name}/{name}/menu form)
        #[arg(long)]
        legacy: bool,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List restaurants and branches with publish state and public URLs
    List,
    /// Persist a template choice onto a branch and print its public URL
    Apply {
        /// Branch identifier
        branch_id: String,
        /// Template identifier (unknown identifiers fall back to default)
        template: String,
    },
    /// List the available menu templates
    Templates,
    /// Print a stock menu-press.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let site = config::SiteConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            restaurant,
            branch,
            template,
            legacy,
            out,
        } => {
            let store = JsonStore::open(&site.store_path)?;
            let address = if legacy {
                MenuAddress::Names { restaurant, branch }
            } else {
                MenuAddress::Slugs {
                    restaurant,
                    branch,
                    template,
                }
            };

            let html = match resolve(&store, &address)? {
                Resolution::Found(menu) => {
                    let grouped = group::group_items(menu.items);
                    let page = MenuPage {
                        restaurant: &menu.restaurant,
                        branch: &menu.branch,
                        menu: &grouped,
                        site: &site,
                    };
                    let markup = render_menu(menu.template, &page);
                    if let Some(out) = &out {
                        output::print_render_output(
                            &menu.restaurant.name,
                            &menu.branch.name,
                            menu.template,
                            out,
                        );
                    }
                    markup
                }
                Resolution::NotFound(reason) => {
                    eprintln!("menu not found: {}", reason.message());
                    render_not_found(reason)
                }
            };

            match out {
                Some(out) => {
                    if let Some(parent) = out.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&out, html.into_string())?;
                }
                None => println!("{}", html.into_string()),
            }
        }
        Command::List => {
            let store = JsonStore::open(&site.store_path)?;
            let listing = full_listing(&store)?;
            output::print_list_output(&listing, &site);
        }
        Command::Apply {
            branch_id,
            template,
        } => {
            let mut store = JsonStore::open(&site.store_path)?;
            let template = TemplateId::parse(&template);
            let Some((restaurant, branch)) = publish::locate_branch(&store, &branch_id)? else {
                return Err(format!("no branch with id {branch_id:?}").into());
            };
            publish::apply_template(&mut store, &branch_id, template)?;
            println!("Template applied! This branch menu is now public.");
            println!(
                "{}",
                publish::public_menu_url(&site.origin, &restaurant.name, &branch.name, template)
            );
        }
        Command::Templates => {
            output::print_template_list();
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Every restaurant with its branches, in store (newest-first) order.
fn full_listing(
    store: &JsonStore,
) -> Result<Vec<(Restaurant, Vec<Branch>)>, menu_press::store::StoreError> {
    use menu_press::store::MenuStore;
    let mut listing = Vec::new();
    for restaurant_row in store.restaurants()? {
        let restaurant = Restaurant::from_row(&restaurant_row);
        let branches = store
            .branches_of(&restaurant.id)?
            .iter()
            .map(Branch::from_row)
            .collect();
        listing.push((restaurant, branches));
    }
    Ok(listing)
}
