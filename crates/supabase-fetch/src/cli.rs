use clap::Parser;
use supabase_fetch_core::{FetchConfig, TableEncoding};

#[derive(Parser, Debug)]
#[command(
    name = "supabase-fetch",
    version,
    about = "Fetch every row of a Supabase table and print the raw response body"
)]
pub struct Cli {
    #[arg(long, env = "SUPABASE_URL", help = "Project URL, e.g. https://your-project.supabase.co")]
    pub url: String,
    #[arg(
        long,
        env = "SUPABASE_ANON_KEY",
        hide_env_values = true,
        help = "Anon or service_role key sent as apikey and bearer token"
    )]
    pub api_key: String,
    #[arg(long, env = "SUPABASE_TABLE", help = "Table exposed under /rest/v1/")]
    pub table: String,
    #[arg(
        long,
        env = "SUPABASE_TABLE_ENCODING",
        default_value_t = TableEncoding::Verbatim,
        value_parser = parse_encoding,
        help = "How the table name is put in the URL: verbatim or percent"
    )]
    pub table_encoding: TableEncoding,
    #[arg(
        long,
        env = "SUPABASE_FAIL_ON_STATUS",
        help = "Exit non-zero without printing when the status is 400 or above"
    )]
    pub fail_on_status: bool,
}

impl Cli {
    pub fn into_config(self) -> FetchConfig {
        FetchConfig::new(self.url, self.api_key, self.table)
            .table_encoding(self.table_encoding)
            .fail_on_status(self.fail_on_status)
    }
}

fn parse_encoding(s: &str) -> Result<TableEncoding, String> {
    s.parse::<TableEncoding>().map_err(|e| e.to_string())
}
