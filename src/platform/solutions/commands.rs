//! Solution command handlers

use log::{debug, info};

use crate::cli::{Cli, SolutionListArgs};
use crate::output::output_solutions;
use crate::platform::session::connect;
use crate::platform::PlatformClient;
use crate::ui::{create_spinner, finish_spinner};

use super::filter::SubscriptionFilter;

/// Run the solution list command
///
/// Flags are validated before any connection is set up, so an invalid
/// combination never reaches the network.
pub async fn run_solution_list_command(
    cli: &Cli,
    args: &SolutionListArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = SubscriptionFilter::from_flags(args.subscribed, args.unsubscribed)?;
    let session = connect(cli)?;
    fetch_and_print_solutions(&session.client, &session.tenant, filter, cli).await
}

pub(crate) async fn fetch_and_print_solutions(
    client: &PlatformClient,
    tenant: &str,
    filter: SubscriptionFilter,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    info!("Fetching the list of solutions...");
    debug!("Tenant: {}, filter: {:?}", tenant, filter);

    let spinner = create_spinner(
        &format!("Fetching solutions for tenant '{}'...", tenant),
        cli.batch || cli.output.is_structured(),
    );
    let result = client.list_solutions(tenant, filter).await;
    finish_spinner(spinner);

    let items = result?;
    output_solutions(&items, cli.output, cli.no_header);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Command, SolutionAction};
    use crate::error::PlatformError;
    use clap::Parser;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SOLUTIONS_PATH: &str = "/objstore/v1beta/objects/extensibility:solution";

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["solctl"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn list_args(cli: &Cli) -> &SolutionListArgs {
        let Command::Solution {
            action: SolutionAction::List(args),
        } = &cli.command
        else {
            unreachable!()
        };
        args
    }

    fn foo_response() -> serde_json::Value {
        serde_json::json!({
            "items": [{
                "id": "s1",
                "data": {
                    "name": "Foo",
                    "isSystem": false,
                    "isSubscribed": true,
                    "dependencies": []
                }
            }]
        })
    }

    #[tokio::test]
    async fn test_both_flags_fail_without_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(foo_response()))
            .expect(0)
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let cli = parse(&[
            "--url",
            uri.as_str(),
            "--tenant",
            "acme",
            "solution",
            "list",
            "--subscribed",
            "--unsubscribed",
        ]);

        let err = run_solution_list_command(&cli, list_args(&cli))
            .await
            .unwrap_err();
        let err = err.downcast::<PlatformError>().unwrap();
        assert!(matches!(*err, PlatformError::Usage(_)));
        assert!(err.to_string().contains("cannot use both"));
    }

    #[tokio::test]
    async fn test_list_without_flags_for_tenant() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SOLUTIONS_PATH))
            .and(query_param_is_missing("filter"))
            .and(header("layer-type", "TENANT"))
            .and(header("layer-id", "acme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(foo_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cli = parse(&["solution", "list", "-b"]);
        let client = PlatformClient::test_client(&mock_server.uri());
        fetch_and_print_solutions(&client, "acme", SubscriptionFilter::All, &cli)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_subscribed_sends_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SOLUTIONS_PATH))
            .and(query_param("filter", "data.isSubscribed eq true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(foo_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cli = parse(&["solution", "list", "--subscribed", "-o", "json"]);
        let args = list_args(&cli);
        let filter = SubscriptionFilter::from_flags(args.subscribed, args.unsubscribed).unwrap();

        let client = PlatformClient::test_client(&mock_server.uri());
        fetch_and_print_solutions(&client, "acme", filter, &cli)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_propagates_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(SOLUTIONS_PATH))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let cli = parse(&["solution", "list", "-b"]);
        let client = PlatformClient::test_client(&mock_server.uri());
        let err = fetch_and_print_solutions(&client, "acme", SubscriptionFilter::All, &cli)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
