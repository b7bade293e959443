use anyhow::{anyhow, bail, Context};
use mywork::generator::MockGenerator;
use mywork::session::{LoginForm, SessionResolver, SqliteStore};
use mywork::views::directory::{self, AlumniFilter};
use mywork::views::recruiter::{self, CandidateQuery};
use mywork::{Role, Settings};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

const USAGE: &str = "usage: mywork <command> [args]

commands:
  login <email> <password> <role>
  quick-login <role>
  logout
  whoami
  tabs
  classmates
  students <department> <year> <section>
  alumni [company] [search]
  recruit [min_cgpa] [search]";

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_role(s: &str) -> anyhow::Result<Role> {
    Ok(s.parse::<Role>()?)
}

fn main() -> anyhow::Result<()> {
    mywork::init_logging();

    let settings = Settings::from_env()?;
    info!("Settings: {:?}", settings);

    let catalog = Arc::new(settings.load_catalog().context("loading catalog")?);
    let store = Arc::new(
        SqliteStore::open(&settings.session_db).context("opening session store")?,
    );
    let mut resolver = SessionResolver::new(catalog.clone(), store)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["login", email, password, role] => {
            let form = LoginForm::new(*email, *password, parse_role(role)?);
            match form.submit(&mut resolver) {
                Ok(user) => print_json(&user)?,
                Err(e) if e.is_user_facing() => bail!("{}", e),
                Err(e) => return Err(e.into()),
            }
        }
        ["quick-login", role] => {
            let user = resolver.quick_login(parse_role(role)?)?;
            print_json(&user)?;
        }
        ["logout"] => resolver.logout()?,
        ["whoami"] => print_json(&resolver.current())?,
        ["tabs"] => {
            let role = resolver.role().ok_or_else(|| anyhow!("not logged in"))?;
            print_json(&serde_json::json!({
                "tabs": role.tabs(),
                "default": role.default_tab(),
            }))?;
        }
        ["students", department, year, section] => {
            let year: i32 = year.parse().context("year must be a number")?;
            let gen = MockGenerator::new(catalog, settings.seed);
            print_json(&gen.generate_students(department, year, section))?;
        }
        ["alumni", rest @ ..] if rest.len() <= 2 => {
            let gen = MockGenerator::new(catalog, settings.seed);
            let mut filter = match resolver.role() {
                Some(Role::Alumni) => AlumniFilter::for_alumni_dashboard(),
                _ => AlumniFilter::default(),
            };
            if let Some(company) = rest.first().filter(|c| !c.is_empty()) {
                filter = filter.with_company(*company);
            }
            if let Some(search) = rest.get(1) {
                filter = filter.with_search(*search);
            }
            print_json(&filter.apply(gen.alumni()))?;
        }
        ["recruit", rest @ ..] if rest.len() <= 2 => {
            let gen = MockGenerator::new(catalog, settings.seed);
            let mut query = CandidateQuery::default();
            if let Some(min) = rest.first() {
                query.min_cgpa = min.parse().context("min_cgpa must be a number")?;
            }
            if let Some(search) = rest.get(1) {
                query.search = search.to_string();
            }
            print_json(&recruiter::search_candidates(&gen, &query))?;
        }
        ["classmates"] => {
            let user = resolver.current().ok_or_else(|| anyhow!("not logged in"))?;
            let gen = MockGenerator::new(catalog.clone(), settings.seed);
            print_json(&directory::classmates(
                &gen,
                user.department.as_deref(),
                user.year,
                user.section.as_deref(),
            ))?;
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}
