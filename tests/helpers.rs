// Shared test helpers: a wiremock stand-in for the postback result form.
//
// GET serves the form, POSTs carrying the search button serve the search
// page, every other POST is a dropdown postback answered with a fresh form.

use std::time::Duration;

use exam_results::Config;
use url::form_urlencoded;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// The form page with every dropdown populated.
pub fn form_page(viewstate: &str) -> String {
    format!(
        r#"<html><body>
<form method="post" action="./" id="form1">
  <input type="hidden" name="__EVENTTARGET" id="__EVENTTARGET" value="" />
  <input type="hidden" name="__EVENTARGUMENT" id="__EVENTARGUMENT" value="" />
  <input type="hidden" name="__VIEWSTATE" id="__VIEWSTATE" value="{viewstate}" />
  <input type="hidden" name="__EVENTVALIDATION" value="ev-{viewstate}" />
  <select name="ddlInst" id="ddlInst">
    <option value="0">-- Select Institute --</option>
    <option value="1">CSPIT</option>
    <option value="2">DEPSTAR</option>
  </select>
  <select name="ddlDegree" id="ddlDegree">
    <option value="0">-- Select Degree --</option>
    <option value="3">B.Tech (CE)</option>
  </select>
  <select name="ddlSem" id="ddlSem">
    <option value="0">-- Select Semester --</option>
    <option value="2">Semester 2</option>
  </select>
  <select name="ddlScheduleExam" id="ddlScheduleExam">
    <option value="0">-- Select Exam --</option>
    <option value="41">Regular May 2025</option>
  </select>
  <input type="text" name="txtEnrNo" id="txtEnrNo" value="" />
  <input type="submit" name="btnSearch" value="Search" id="btnSearch" />
</form>
</body></html>"#
    )
}

/// A search response carrying a grade report.
#[allow(dead_code)]
pub fn result_page(score: &str, credits: &str) -> String {
    format!(
        r#"<html><body>
<input type="hidden" name="__VIEWSTATE" value="searched" />
<table><tr><td><b>SEMESTER  GRADE  REPORT</b></td></tr></table>
<span id="uclGrdNEP_lblSGPA">{score}</span>
<span id="uclGrdNEP_lblTotCredit">{credits}</span>
</body></html>"#
    )
}

/// A search response for an enrollment number without a result.
#[allow(dead_code)]
pub fn no_result_page() -> String {
    form_page("searched")
}

/// Starts a server emulating the form.
///
/// Each postback answers with view-state `after-<control>` so tests can
/// tell which response a later request echoed. Search requests get
/// `search_page`.
pub async fn start_form_server(search_page: String) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(form_page("initial")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("btnSearch=Search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page))
        .with_priority(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(|req: &Request| {
            let target = field(&parse_form(req), "__EVENTTARGET")
                .unwrap_or_default()
                .to_string();
            ResponseTemplate::new(200).set_body_string(form_page(&format!("after-{}", target)))
        })
        .mount(&server)
        .await;

    server
}

/// Serves `page` for searches of one specific enrollment number.
#[allow(dead_code)]
pub async fn mount_result_for(server: &MockServer, enrollment: &str, page: String) {
    Mock::given(method("POST"))
        .and(body_string_contains("btnSearch=Search"))
        .and(body_string_contains(format!("txtEnrNo={}", enrollment).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .with_priority(1)
        .mount(server)
        .await;
}

/// Base URL of the emulated form.
pub fn form_url(server: &MockServer) -> String {
    format!("{}/", server.uri())
}

/// A configuration pointing at the emulated form.
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> Config {
    Config {
        base_url: form_url(server),
        user_agent: "exam_results_test/1.0".to_string(),
        request_timeout_secs: 5,
        ..Default::default()
    }
}

pub fn parse_form(req: &Request) -> Vec<(String, String)> {
    form_urlencoded::parse(&req.body).into_owned().collect()
}

pub fn field<'a>(form: &'a [(String, String)], name: &str) -> Option<&'a str> {
    form.iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

/// Every request the server saw, in arrival order.
#[allow(dead_code)]
pub async fn all_requests(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled by default")
}

/// Decoded bodies of every POST, in arrival order.
#[allow(dead_code)]
pub async fn posted_forms(server: &MockServer) -> Vec<Vec<(String, String)>> {
    all_requests(server)
        .await
        .iter()
        .filter(|req| req.method.as_str() == "POST")
        .map(parse_form)
        .collect()
}

/// Slows every search response down by `delay`.
#[allow(dead_code)]
pub async fn start_slow_form_server(delay: Duration) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(form_page("initial")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("btnSearch=Search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(result_page("9.00", "20"))
                .set_delay(delay),
        )
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(form_page("step")))
        .mount(&server)
        .await;

    server
}
