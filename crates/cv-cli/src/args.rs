//! Command line arguments and their translation into query documents

use clap::{Args, Parser, Subcommand};
use cv_core::result::QueryResult;
use cv_queries::{ExecutionMatcher, ExecutionQuery, UserQuery, UserQueryBuilder, UserQueryMode};

/// Query users and executions on the Convai platform
///
/// Credentials come from CONVAI_API_KEY (a `.env` file is honoured).
#[derive(Debug, Parser)]
#[command(name = "convai", version, about)]
pub struct Cli {
    /// Override the API root
    #[arg(long, global = true, env = "CONVAI_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query super users
    Users(UsersArgs),

    /// Query executions
    Executions(ExecutionsArgs),
}

/// `FIELD=VALUE[,VALUE...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    pub field: String,
    pub values: Vec<String>,
}

/// `FIELD=LOW..HIGH`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRange {
    pub field: String,
    pub low: String,
    pub high: String,
}

#[derive(Debug, Args)]
pub struct UsersArgs {
    /// How checks combine: all, any or none
    #[arg(long, default_value = "all", value_parser = parse_mode)]
    pub mode: UserQueryMode,

    #[arg(long)]
    pub limit: Option<i64>,

    #[arg(long, default_value_t = 0)]
    pub offset: i64,

    /// Field equals one of the values
    #[arg(long = "eq", value_name = "FIELD=VALUES", value_parser = parse_field_values)]
    pub equals: Vec<FieldValues>,

    /// Field equals none of the values
    #[arg(long = "ne", value_name = "FIELD=VALUES", value_parser = parse_field_values)]
    pub not_equals: Vec<FieldValues>,

    /// Field starts with one of the values
    #[arg(long = "prefix", value_name = "FIELD=VALUES", value_parser = parse_field_values)]
    pub starts_with: Vec<FieldValues>,

    #[arg(long = "gt", value_name = "FIELD=VALUE", value_parser = parse_field_values)]
    pub greater_than: Vec<FieldValues>,

    #[arg(long = "lt", value_name = "FIELD=VALUE", value_parser = parse_field_values)]
    pub less_than: Vec<FieldValues>,

    /// Field is present
    #[arg(long, value_name = "FIELD")]
    pub exists: Vec<String>,

    /// Field is absent
    #[arg(long, value_name = "FIELD")]
    pub missing: Vec<String>,

    /// Only count the users the query reaches
    #[arg(long)]
    pub reachable: bool,

    /// Print the query document instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ExecutionsArgs {
    #[arg(long, default_value_t = cv_core::pagination::DEFAULT_LIMIT)]
    pub limit: i64,

    #[arg(long, default_value_t = 0)]
    pub offset: i64,

    #[arg(long = "eq", value_name = "FIELD=VALUES", value_parser = parse_field_values)]
    pub equals: Vec<FieldValues>,

    /// Exclude executions whose field equals one of the values
    #[arg(long = "not-eq", value_name = "FIELD=VALUES", value_parser = parse_field_values)]
    pub not_equals: Vec<FieldValues>,

    #[arg(long = "prefix", value_name = "FIELD=PREFIX", value_parser = parse_field_value)]
    pub has_prefix: Vec<FieldValues>,

    /// Exclusive range
    #[arg(long, value_name = "FIELD=LOW..HIGH", value_parser = parse_field_range)]
    pub between: Vec<FieldRange>,

    /// Inclusive range
    #[arg(long, value_name = "FIELD=LOW..HIGH", value_parser = parse_field_range)]
    pub between_inclusive: Vec<FieldRange>,

    #[arg(long, value_name = "FIELD")]
    pub exists: Vec<String>,

    #[arg(long, value_name = "FIELD")]
    pub sort_asc: Vec<String>,

    #[arg(long, value_name = "FIELD")]
    pub sort_desc: Vec<String>,

    /// Print the query document instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl UsersArgs {
    pub fn to_query(&self) -> QueryResult<UserQuery> {
        let mut builder = UserQueryBuilder::new(self.mode, self.limit);
        builder.set_offset(self.offset);

        for fv in &self.equals {
            builder.where_field(&fv.field)?.equals(&fv.values)?;
        }
        for fv in &self.not_equals {
            builder.where_field(&fv.field)?.not_equals(&fv.values)?;
        }
        for fv in &self.starts_with {
            builder.where_field(&fv.field)?.starts_with(&fv.values)?;
        }
        for fv in &self.greater_than {
            builder.where_field(&fv.field)?.greater_than(&fv.values)?;
        }
        for fv in &self.less_than {
            builder.where_field(&fv.field)?.less_than(&fv.values)?;
        }
        for field in &self.exists {
            builder.where_field(field)?.exists()?;
        }
        for field in &self.missing {
            builder.where_field(field)?.not_exists()?;
        }

        Ok(builder.build())
    }
}

impl ExecutionsArgs {
    pub fn to_query(&self) -> QueryResult<ExecutionQuery> {
        let mut matcher = ExecutionMatcher::new();
        matcher.set_limit(self.limit).set_offset(self.offset);

        for fv in &self.equals {
            matcher.where_field(&fv.field)?.equals(&fv.values)?;
        }
        for fv in &self.not_equals {
            matcher.where_field(&fv.field)?.not().equals(&fv.values)?;
        }
        for fv in &self.has_prefix {
            for prefix in &fv.values {
                matcher.where_field(&fv.field)?.has_prefix(prefix.as_str())?;
            }
        }
        for range in &self.between {
            matcher
                .where_field(&range.field)?
                .between(range.low.as_str(), range.high.as_str(), false)?;
        }
        for range in &self.between_inclusive {
            matcher
                .where_field(&range.field)?
                .between(range.low.as_str(), range.high.as_str(), true)?;
        }
        for field in &self.exists {
            matcher.where_field(field)?.exists()?;
        }

        for field in &self.sort_asc {
            matcher.sort_asc(field.as_str());
        }
        for field in &self.sort_desc {
            matcher.sort_desc(field.as_str());
        }

        Ok(matcher.build())
    }
}

fn parse_mode(s: &str) -> Result<UserQueryMode, String> {
    UserQueryMode::from_str(s).ok_or_else(|| format!("unknown mode {s:?}, expected all, any or none"))
}

fn split_field(s: &str) -> Result<(&str, &str), String> {
    let (field, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {s:?}"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in {s:?}"));
    }
    Ok((field, rest))
}

/// Comma separated values; empty items are dropped
pub fn parse_field_values(s: &str) -> Result<FieldValues, String> {
    let (field, rest) = split_field(s)?;
    let values: Vec<String> = rest
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() {
        return Err(format!("no values given for {field}"));
    }

    Ok(FieldValues {
        field: field.to_string(),
        values,
    })
}

/// A single value, taken verbatim so it may contain commas
pub fn parse_field_value(s: &str) -> Result<FieldValues, String> {
    let (field, value) = split_field(s)?;
    Ok(FieldValues {
        field: field.to_string(),
        values: vec![value.to_string()],
    })
}

pub fn parse_field_range(s: &str) -> Result<FieldRange, String> {
    let (field, rest) = split_field(s)?;
    let (low, high) = rest
        .split_once("..")
        .ok_or_else(|| format!("expected {field}=LOW..HIGH, got {s:?}"))?;

    Ok(FieldRange {
        field: field.to_string(),
        low: low.trim().to_string(),
        high: high.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use cv_queries::{ExecutionOperation, UserQueryOperation};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("convai").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field_values() {
        let fv = parse_field_values("country=NL, BE,").unwrap();
        assert_eq!(fv.field, "country");
        assert_eq!(fv.values, vec!["NL", "BE"]);

        assert!(parse_field_values("country").is_err());
        assert!(parse_field_values("=NL").is_err());
        assert!(parse_field_values("country=").is_err());
    }

    #[test]
    fn test_parse_field_range() {
        let range = parse_field_range("startTime=2024-01-01..2024-02-01").unwrap();
        assert_eq!(range.field, "startTime");
        assert_eq!(range.low, "2024-01-01");
        assert_eq!(range.high, "2024-02-01");

        assert!(parse_field_range("startTime=2024-01-01").is_err());
    }

    #[test]
    fn test_users_query_from_flags() {
        let cli = parse(&[
            "users", "--mode", "any", "--limit", "25", "--offset", "50",
            "--eq", "country=NL,BE", "--gt", "age=18", "--missing", "email",
        ]);
        let Command::Users(args) = cli.command else {
            panic!("expected users command");
        };

        let query = args.to_query().unwrap();
        assert_eq!(query.mode, UserQueryMode::Any);
        assert_eq!(query.limit, 25);
        assert_eq!(query.offset, 50);
        assert_eq!(query.checks.len(), 3);
        assert_eq!(query.checks[0].values, vec!["NL", "BE"]);
        assert_eq!(query.checks[1].operation, UserQueryOperation::GreaterThan);
        assert_eq!(query.checks[2].field, "email");
        assert_eq!(query.checks[2].operation, UserQueryOperation::NotExists);
    }

    #[test]
    fn test_users_defaults() {
        let Command::Users(args) = parse(&["users"]).command else {
            panic!("expected users command");
        };

        let query = args.to_query().unwrap();
        assert_eq!(query.mode, UserQueryMode::All);
        assert_eq!(query.limit, 10);
        assert!(query.checks.is_empty());
        assert!(!args.reachable);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = Cli::try_parse_from(["convai", "users", "--mode", "some"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_executions_query_from_flags() {
        let cli = parse(&[
            "executions",
            "--eq", "channel=telegram",
            "--not-eq", "text=/start",
            "--prefix", "text=hello, there",
            "--between-inclusive", "executionDuration=10..100",
            "--sort-desc", "startTime",
            "--limit", "5",
        ]);
        let Command::Executions(args) = cli.command else {
            panic!("expected executions command");
        };

        let query = args.to_query().unwrap();
        assert_eq!(query.limit, 5);
        assert_eq!(query.filters.len(), 3);
        assert_eq!(query.filters[1].values, vec!["hello, there"]);
        assert_eq!(query.filters[2].operation, ExecutionOperation::BetweenInclusive);
        assert_eq!(query.filters[2].lower_bound.as_deref(), Some("10"));
        assert_eq!(query.must_not.len(), 1);
        assert_eq!(query.must_not[0].field, "text");
        assert_eq!(query.sort.len(), 1);
        assert!(!query.sort[0].ascending);
    }
}
