use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::browser::shell::{Shell, ShellRequest, ShellUpdate};

const DEFAULT_START_URL: &str = "https://example.com";

pub struct Browser {
    start_url: String,
}

impl Browser {
    pub fn new(start_url: Option<String>) -> Self {
        Self {
            start_url: start_url.unwrap_or_else(|| DEFAULT_START_URL.to_string()),
        }
    }

    /// Open the shell window and run the event loop. Does not return.
    pub fn run(self) -> Result<()> {
        use wry::{
            application::{
                dpi::LogicalSize,
                event::{Event, StartCause, WindowEvent},
                event_loop::{ControlFlow, EventLoop},
                window::WindowBuilder,
            },
            webview::{WebView, WebViewBuilder},
        };

        // EventLoop must be created on the main thread (macOS requirement)
        let event_loop = EventLoop::new();

        let window = WindowBuilder::new()
            .with_title("Skiff Browser")
            .with_inner_size(LogicalSize::new(1200.0, 800.0))
            .build(&event_loop)
            .context("Failed to create window")?;

        // The IPC handler needs the webview it belongs to, so the slot is
        // filled in after the build. Everything stays on the event-loop
        // thread; Rc<RefCell<_>> is all the sharing this needs.
        let shell = Rc::new(RefCell::new(Shell::new()));
        let webview_cell: Rc<RefCell<Option<WebView>>> = Rc::new(RefCell::new(None));

        let shell_for_ipc = shell.clone();
        let webview_for_ipc = webview_cell.clone();
        let webview = WebViewBuilder::new(window)?
            .with_url(&Self::shell_page_url())?
            .with_initialization_script(&Self::start_url_script(&self.start_url)?)
            .with_devtools(true)
            .with_ipc_handler(move |_, message| {
                let request = match serde_json::from_str::<ShellRequest>(&message) {
                    Ok(request) => request,
                    Err(err) => {
                        warn!("Dropping malformed shell message: {}", err);
                        return;
                    }
                };
                let update = shell_for_ipc.borrow_mut().handle(request);
                if let Some(webview) = webview_for_ipc.borrow().as_ref() {
                    Self::apply_update(webview, &update);
                }
            })
            .build()
            .context("Failed to create shell webview")?;
        *webview_cell.borrow_mut() = Some(webview);

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::NewEvents(StartCause::Init) => {
                    info!("Skiff Browser initialized");
                }
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    *control_flow = ControlFlow::Exit;
                }
                _ => {}
            }
        });
    }

    /// Push render state into the page. Failures are logged, never fatal.
    fn apply_update(webview: &wry::webview::WebView, update: &ShellUpdate) {
        match serde_json::to_string(update) {
            Ok(json) => {
                let script = format!("window.__shell.apply({});", json);
                if let Err(err) = webview.evaluate_script(&script) {
                    warn!("Failed to apply shell update: {}", err);
                }
            }
            Err(err) => warn!("Failed to encode shell update: {}", err),
        }
    }

    // The page issues the initial navigate itself once loaded, so the first
    // update never races the page load.
    fn start_url_script(start_url: &str) -> Result<String> {
        let encoded =
            serde_json::to_string(start_url).context("Failed to encode start URL")?;
        Ok(format!("window.__START_URL = {};", encoded))
    }

    // Shell page shipped as a data URL so the binary has no asset files.
    fn shell_page_url() -> String {
        format!("data:text/html;base64,{}", base64::encode(SHELL_HTML))
    }
}

const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Skiff Browser</title>
  <style>
    * { box-sizing: border-box; }
    html, body { height: 100%; margin: 0; font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Roboto, Helvetica, Arial, sans-serif; background: #121212; color: #e6e6e6; }
    .toolbar { position: fixed; top: 0; left: 0; right: 0; height: 48px; background: #1e1e1e; border-bottom: 1px solid #2a2a2a; display: flex; align-items: center; gap: 8px; padding: 0 10px; }
    .nav-btn { width: 34px; height: 34px; border: none; background: #2a2a2a; color: #e6e6e6; border-radius: 6px; cursor: pointer; font-size: 15px; }
    .nav-btn:hover { background: #3a3a3a; }
    .nav-btn:disabled { opacity: 0.4; cursor: not-allowed; }
    #addressBar { flex: 1; height: 34px; padding: 0 12px; border-radius: 6px; border: 1px solid #2a2a2a; background: #1b1b1b; color: #e6e6e6; outline: none; font-size: 14px; }
    #addressBar:focus { border-color: #3a83f7; }
    #errorMessage { display: none; position: fixed; top: 48px; left: 0; right: 0; padding: 6px 12px; background: #5b1f1f; color: #ffd7d7; font-size: 13px; }
    #errorMessage.show { display: block; }
    #contentFrame { position: fixed; top: 48px; left: 0; right: 0; bottom: 24px; width: 100%; height: calc(100% - 72px); border: none; background: #ffffff; }
    .statusbar { position: fixed; bottom: 0; left: 0; right: 0; height: 24px; background: #1e1e1e; border-top: 1px solid #2a2a2a; display: flex; align-items: center; padding: 0 10px; font-size: 12px; color: #a7a7a7; }
  </style>
</head>
<body>
  <div class="toolbar">
    <button id="backBtn" class="nav-btn" title="Back" disabled>&#8592;</button>
    <button id="forwardBtn" class="nav-btn" title="Forward" disabled>&#8594;</button>
    <button id="refreshBtn" class="nav-btn" title="Refresh">&#10227;</button>
    <input id="addressBar" type="text" placeholder="Enter a URL or search terms" />
    <button id="goBtn" class="nav-btn" title="Go">Go</button>
  </div>
  <div id="errorMessage"></div>
  <iframe id="contentFrame" src="about:blank"></iframe>
  <div class="statusbar"><span id="statusText">Ready</span></div>
  <script>
    (function() {
      var addressBar = document.getElementById('addressBar');
      var contentFrame = document.getElementById('contentFrame');
      var backBtn = document.getElementById('backBtn');
      var forwardBtn = document.getElementById('forwardBtn');
      var refreshBtn = document.getElementById('refreshBtn');
      var goBtn = document.getElementById('goBtn');
      var statusText = document.getElementById('statusText');
      var errorMessage = document.getElementById('errorMessage');

      function send(request) {
        window.ipc.postMessage(JSON.stringify(request));
      }

      // All navigation state lives on the Rust side; this just renders it.
      window.__shell = {
        apply: function(update) {
          if (update.load) {
            contentFrame.src = update.load;
          }
          if (document.activeElement !== addressBar || update.load) {
            addressBar.value = update.address;
          }
          backBtn.disabled = !update.canGoBack;
          forwardBtn.disabled = !update.canGoForward;
          if (update.status) {
            statusText.textContent = update.status;
          }
          if (update.error) {
            errorMessage.textContent = update.error;
            errorMessage.classList.add('show');
          } else if (update.load) {
            errorMessage.classList.remove('show');
          }
        }
      };

      backBtn.addEventListener('click', function() { send({ op: 'back' }); });
      forwardBtn.addEventListener('click', function() { send({ op: 'forward' }); });
      refreshBtn.addEventListener('click', function() { send({ op: 'refresh' }); });
      goBtn.addEventListener('click', function() {
        send({ op: 'navigate', input: addressBar.value });
      });
      addressBar.addEventListener('keydown', function(e) {
        if (e.key === 'Enter') {
          e.preventDefault();
          send({ op: 'navigate', input: addressBar.value });
        }
      });

      contentFrame.addEventListener('load', function() {
        statusText.textContent = 'Done';
      });
      contentFrame.addEventListener('error', function() {
        statusText.textContent = 'Error loading page';
        errorMessage.textContent = 'Failed to load the page.';
        errorMessage.classList.add('show');
      });

      window.addEventListener('DOMContentLoaded', function() {
        send({ op: 'navigate', input: window.__START_URL || 'about:blank' });
      });
    })();
  </script>
</body>
</html>"#;
