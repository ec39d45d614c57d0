use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use profrate::cli::seeder::seed_demo_catalog;
use profrate::modules::catalog::model::{
    CreateModuleDto, CreateModuleInstanceDto, CreateProfessorDto,
};
use profrate::modules::catalog::service::CatalogService;
use profrate_config::{DatabaseConfig, RatingConfig};
use profrate_core::AppError;
use profrate_db::{SqlitePool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "profrate-admin")]
#[command(about = "Profrate admin - manage professors, modules and module instances", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a professor
    AddProfessor {
        /// Unique professor code, e.g. JE1
        code: String,

        /// Display name (prompted if not provided)
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// Add a module
    AddModule {
        /// Unique module code, e.g. CD1
        code: String,

        /// Display name (prompted if not provided)
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// Add an offering of a module taught by one or more professors
    AddInstance {
        /// Module code
        #[arg(short = 'm', long)]
        module: String,

        /// Academic year
        #[arg(short = 'y', long)]
        year: i64,

        /// Semester (1 or 2)
        #[arg(short = 's', long)]
        semester: i64,

        /// Professor codes (repeat for several professors)
        #[arg(short = 'p', long = "professor", required = true)]
        professors: Vec<String>,
    },
    /// Remove a professor and their ratings
    RemoveProfessor {
        code: String,
    },
    /// Remove a module, its instances and their ratings
    RemoveModule {
        code: String,
    },
    /// Insert the demo catalog (existing entries are kept)
    Seed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::AddProfessor { code, name } => handle_add_professor(&pool, code, name).await,
        Commands::AddModule { code, name } => handle_add_module(&pool, code, name).await,
        Commands::AddInstance {
            module,
            year,
            semester,
            professors,
        } => handle_add_instance(&pool, module, year, semester, professors).await,
        Commands::RemoveProfessor { code } => CatalogService::delete_professor(&pool, &code)
            .await
            .map(|_| println!("✅ Professor {} removed", code)),
        Commands::RemoveModule { code } => CatalogService::delete_module(&pool, &code)
            .await
            .map(|_| println!("✅ Module {} removed", code)),
        Commands::Seed => handle_seed(&pool).await,
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e.message());
        std::process::exit(1);
    }
}

async fn connect() -> anyhow::Result<SqlitePool> {
    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

fn prompt_name(name: Option<String>, prompt: &str) -> Result<String, AppError> {
    match name {
        Some(name) => Ok(name),
        None => Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(AppError::internal),
    }
}

async fn handle_add_professor(
    pool: &SqlitePool,
    code: String,
    name: Option<String>,
) -> Result<(), AppError> {
    let name = prompt_name(name, "Professor name")?;
    let professor = CatalogService::create_professor(pool, CreateProfessorDto { code, name }).await?;
    println!("✅ Professor {} added", professor);
    Ok(())
}

async fn handle_add_module(
    pool: &SqlitePool,
    code: String,
    name: Option<String>,
) -> Result<(), AppError> {
    let name = prompt_name(name, "Module name")?;
    let module = CatalogService::create_module(pool, CreateModuleDto { code, name }).await?;
    println!("✅ Module {} added", module);
    Ok(())
}

async fn handle_add_instance(
    pool: &SqlitePool,
    module_code: String,
    year: i64,
    semester: i64,
    professor_codes: Vec<String>,
) -> Result<(), AppError> {
    let dto = CreateModuleInstanceDto {
        module_code: module_code.clone(),
        year,
        semester,
        professor_codes,
    };
    CatalogService::create_module_instance(pool, &RatingConfig::from_env(), dto).await?;
    println!("✅ {} ({}/{}) added", module_code, year, semester);
    Ok(())
}

async fn handle_seed(pool: &SqlitePool) -> Result<(), AppError> {
    let summary = seed_demo_catalog(pool, &RatingConfig::from_env()).await?;
    println!(
        "✅ Seeded {} professors, {} modules, {} module instances",
        summary.professors, summary.modules, summary.module_instances
    );
    Ok(())
}
