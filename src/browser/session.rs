use crate::{browser::config::LaunchOptions,
            config::{EnvProfile, SuiteConfig},
            error::{Result, SuiteError}};
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, Element, Tab};
use std::{cell::Cell,
          ffi::OsStr,
          path::PathBuf,
          sync::Arc,
          time::{Duration, Instant, SystemTime, UNIX_EPOCH}};

/// How often polling assertions re-check their condition
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Browser session bound to one store deployment
///
/// Owns the Chrome instance and the single tab a test drives. Every command is
/// synchronous: it returns once the underlying CDP call and any polling have
/// resolved, so commands issued by one test execute strictly in call order.
pub struct Session {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The one tab this test drives
    tab: Arc<Tab>,

    /// Absolute URL every relative visit path is joined onto
    base_url: String,

    /// Timeout for locate and assert polling
    command_timeout: Duration,

    /// Timeout for full page navigations
    page_load_timeout: Duration,

    /// Where screenshots are written
    screenshot_dir: PathBuf,

    /// When set, uncaught page exceptions are neutralized after each visit
    suppress_page_errors: Cell<bool>,
}

impl Session {
    /// Launch a browser against the given environment profile
    pub fn launch(profile: &EnvProfile, suite: &SuiteConfig, options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Set the browser's idle timeout to 1 hour (default is 30 seconds) so slow
        // suites do not lose their session mid-run
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.sandbox = options.sandbox;

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        let browser = Browser::new(launch_opts).map_err(|e| SuiteError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| SuiteError::LaunchFailed(format!("Failed to create tab: {}", e)))?;
        tab.set_default_timeout(suite.command_timeout);

        log::info!("browser session started against {}", profile.base_url);

        Ok(Self {
            browser,
            tab,
            base_url: profile.base_url.clone(),
            command_timeout: suite.command_timeout,
            page_load_timeout: suite.page_load_timeout,
            screenshot_dir: suite.screenshot_dir.clone(),
            suppress_page_errors: Cell::new(false),
        })
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// The tab this session drives
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Timeout used by locate and assert polling
    pub fn command_timeout(&self) -> Duration {
        self.command_timeout
    }

    /// Navigate to a path relative to the session's base URL
    ///
    /// Suspends until the navigation completes; failing to reach a loaded state
    /// within the page-load timeout fails the test.
    pub fn visit(&self, path: &str) -> Result<()> {
        let url = join_url(&self.base_url, path);
        log::debug!("visit {}", url);

        self.tab
            .navigate_to(&url)
            .map_err(|e| SuiteError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab.set_default_timeout(self.page_load_timeout);
        let navigated = self.tab.wait_until_navigated().map(|_| ());
        self.tab.set_default_timeout(self.command_timeout);
        navigated.map_err(|_| SuiteError::NavigationTimeout(self.page_load_timeout))?;

        if self.suppress_page_errors.get() {
            self.install_page_error_hook()?;
        }

        Ok(())
    }

    /// Find an element, waiting up to the command timeout for it to appear
    pub fn find(&self, selector: &str) -> Result<Element<'_>> {
        self.find_with_timeout(selector, self.command_timeout)
    }

    /// Find an element with a caller-supplied timeout
    pub fn find_with_timeout(&self, selector: &str, timeout: Duration) -> Result<Element<'_>> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map_err(|_| SuiteError::ElementNotFound { selector: selector.to_string(), timeout })
    }

    /// Click an element
    ///
    /// The click is dispatched in-page, bypassing visibility and actionability
    /// pre-checks. Tolerates minor layout flakiness at the cost of accepting
    /// clicks on elements a user could not currently see.
    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.find(selector)?;
        element
            .call_js_fn("function() { this.click(); }", vec![], false)
            .map_err(|e| SuiteError::Runtime(format!("click on '{}' failed: {}", selector, e)))?;
        Ok(())
    }

    /// Clear an input and type text into it
    ///
    /// Clearing dispatches an `input` event so reactive form listeners observe
    /// the reset. Typed text is not read back for verification.
    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.find(selector)?;
        element
            .call_js_fn(
                r#"function() {
                    this.value = '';
                    this.dispatchEvent(new Event('input', { bubbles: true }));
                }"#,
                vec![],
                false,
            )
            .map_err(|e| SuiteError::Runtime(format!("clear of '{}' failed: {}", selector, e)))?;
        element
            .type_into(text)
            .map_err(|e| SuiteError::Runtime(format!("typing into '{}' failed: {}", selector, e)))?;
        Ok(())
    }

    /// Select a dropdown option by its visible text
    pub fn select_option(&self, selector: &str, option_text: &str) -> Result<()> {
        let element = self.find(selector)?;
        let wanted = js_string(option_text);
        let result = element
            .call_js_fn(
                &format!(
                    r#"function() {{
                        const wanted = {wanted};
                        for (const option of this.options) {{
                            if (option.text.trim() === wanted) {{
                                this.value = option.value;
                                this.dispatchEvent(new Event('change', {{ bubbles: true }}));
                                return true;
                            }}
                        }}
                        return false;
                    }}"#
                ),
                vec![],
                false,
            )
            .map_err(|e| SuiteError::Runtime(format!("select on '{}' failed: {}", selector, e)))?;

        match result.value.as_ref().and_then(|v| v.as_bool()) {
            Some(true) => Ok(()),
            _ => Err(SuiteError::AssertionFailed(format!(
                "select '{}' has no option with text '{}'",
                selector, option_text
            ))),
        }
    }

    /// Assert that an element is visible within the command timeout
    pub fn assert_visible(&self, selector: &str) -> Result<()> {
        let ok = self.poll(|| self.probe_visible(selector))?;
        if ok {
            Ok(())
        } else {
            Err(SuiteError::AssertionFailed(format!("element '{}' is not visible", selector)))
        }
    }

    /// Assert that an element's text contains the given substring
    pub fn assert_text_contains(&self, selector: &str, expected: &str) -> Result<()> {
        let ok = self.poll(|| {
            let element = match self.find_with_timeout(selector, POLL_INTERVAL) {
                Ok(element) => element,
                Err(_) => return Ok(false),
            };
            match element.get_inner_text() {
                Ok(text) => Ok(text.contains(expected)),
                Err(_) => Ok(false),
            }
        })?;
        if ok {
            Ok(())
        } else {
            Err(SuiteError::AssertionFailed(format!(
                "element '{}' does not contain text '{}'",
                selector, expected
            )))
        }
    }

    /// Assert that an element carries the given CSS class
    pub fn assert_has_class(&self, selector: &str, class: &str) -> Result<()> {
        let ok = self.poll(|| {
            let element = match self.find_with_timeout(selector, POLL_INTERVAL) {
                Ok(element) => element,
                Err(_) => return Ok(false),
            };
            let result = element
                .call_js_fn("function() { return this.className; }", vec![], false)
                .map_err(|e| SuiteError::Runtime(format!("class read on '{}' failed: {}", selector, e)))?;
            let class_attr = result.value.as_ref().and_then(|v| v.as_str()).unwrap_or("").to_string();
            Ok(class_attr.split_whitespace().any(|c| c == class))
        })?;
        if ok {
            Ok(())
        } else {
            Err(SuiteError::AssertionFailed(format!(
                "element '{}' does not have class '{}'",
                selector, class
            )))
        }
    }

    /// Assert that a form element's value equals the expected string
    pub fn assert_value_equals(&self, selector: &str, expected: &str) -> Result<()> {
        let ok = self.poll(|| {
            let element = match self.find_with_timeout(selector, POLL_INTERVAL) {
                Ok(element) => element,
                Err(_) => return Ok(false),
            };
            let result = element
                .call_js_fn("function() { return this.value; }", vec![], false)
                .map_err(|e| SuiteError::Runtime(format!("value read on '{}' failed: {}", selector, e)))?;
            Ok(result.value.as_ref().and_then(|v| v.as_str()) == Some(expected))
        })?;
        if ok {
            Ok(())
        } else {
            Err(SuiteError::AssertionFailed(format!(
                "element '{}' does not have value '{}'",
                selector, expected
            )))
        }
    }

    /// Assert that the current URL contains the given substring
    pub fn assert_url_contains(&self, fragment: &str) -> Result<()> {
        let ok = self.poll(|| Ok(self.tab.get_url().contains(fragment)))?;
        if ok {
            Ok(())
        } else {
            Err(SuiteError::AssertionFailed(format!(
                "url '{}' does not contain '{}'",
                self.tab.get_url(),
                fragment
            )))
        }
    }

    /// Assert that the page title contains the given substring
    pub fn assert_title_contains(&self, fragment: &str) -> Result<()> {
        let ok = self.poll(|| match self.tab.get_title() {
            Ok(title) => Ok(title.contains(fragment)),
            Err(_) => Ok(false),
        })?;
        if ok {
            Ok(())
        } else {
            Err(SuiteError::AssertionFailed(format!("title does not contain '{}'", fragment)))
        }
    }

    /// The current URL of the driven tab
    pub fn current_url(&self) -> String {
        self.tab.get_url()
    }

    /// The current page title
    pub fn title(&self) -> Result<String> {
        self.tab.get_title().map_err(|e| SuiteError::Runtime(format!("Failed to read title: {}", e)))
    }

    /// Wait until the document reports a complete ready state
    pub fn wait_for_page_load(&self) -> Result<()> {
        let ok = self.poll(|| {
            let result = self
                .tab
                .evaluate("document.readyState === 'complete'", false)
                .map_err(|e| SuiteError::Runtime(format!("readyState probe failed: {}", e)))?;
            Ok(result.value.as_ref().and_then(|v| v.as_bool()).unwrap_or(false))
        })?;
        if ok {
            Ok(())
        } else {
            Err(SuiteError::NavigationTimeout(self.command_timeout))
        }
    }

    /// Capture a PNG screenshot, saved as `{name}-{unix seconds}.png`
    ///
    /// Returns the path the image was written to.
    pub fn screenshot(&self, name: &str) -> Result<PathBuf> {
        let png = self
            .tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| SuiteError::Runtime(format!("screenshot failed: {}", e)))?;

        let stamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
        let path = self.screenshot_dir.join(format!("{}-{}.png", name, stamp));

        std::fs::create_dir_all(&self.screenshot_dir)
            .and_then(|_| std::fs::write(&path, &png))
            .map_err(|e| SuiteError::Runtime(format!("Failed to write screenshot {}: {}", path.display(), e)))?;

        log::debug!("screenshot written to {}", path.display());
        Ok(path)
    }

    /// Convert uncaught page exceptions into no-ops for the rest of the session
    ///
    /// Off by default; an explicit escape hatch for pages whose own scripts
    /// throw. Takes effect on the next visit.
    pub fn ignore_page_errors(&self) {
        self.suppress_page_errors.set(true);
    }

    fn install_page_error_hook(&self) -> Result<()> {
        self.tab
            .evaluate(
                r#"window.addEventListener('error', function (e) { e.preventDefault(); }, true);
                   window.addEventListener('unhandledrejection', function (e) { e.preventDefault(); }, true);
                   true"#,
                false,
            )
            .map_err(|e| SuiteError::Runtime(format!("Failed to install error hook: {}", e)))?;
        Ok(())
    }

    fn probe_visible(&self, selector: &str) -> Result<bool> {
        let element = match self.find_with_timeout(selector, POLL_INTERVAL) {
            Ok(element) => element,
            Err(_) => return Ok(false),
        };
        let result = element
            .call_js_fn(
                r#"function() {
                    const rect = this.getBoundingClientRect();
                    const style = window.getComputedStyle(this);
                    return rect.width > 0 && rect.height > 0
                        && style.visibility !== 'hidden' && style.display !== 'none';
                }"#,
                vec![],
                false,
            )
            .map_err(|e| SuiteError::Runtime(format!("visibility probe on '{}' failed: {}", selector, e)))?;
        Ok(result.value.as_ref().and_then(|v| v.as_bool()).unwrap_or(false))
    }

    /// Re-run a check until it passes or the command timeout expires
    fn poll(&self, mut check: impl FnMut() -> Result<bool>) -> Result<bool> {
        let deadline = Instant::now() + self.command_timeout;
        loop {
            if check()? {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    /// Close the browser
    pub fn close(&self) -> Result<()> {
        // Browser exposes no public close; closing the tab is enough, the
        // process itself shuts down when the Browser instance is dropped.
        let _ = self.tab.close(false);
        Ok(())
    }
}

/// Join a relative path onto the configured base URL
///
/// Absolute URLs pass through untouched so tests can leave the store when a
/// scenario needs to.
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.is_empty() {
        return base_url.trim_end_matches('/').to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Escape a string for embedding as a JS string literal
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
