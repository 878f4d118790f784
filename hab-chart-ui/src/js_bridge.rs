//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js map renderer lives in `assets/js/*.js` and is loaded at
//! runtime. The scripts are evaluated as globals (no ES modules) and
//! exposed via `window.*`. This module provides safe Rust wrappers that
//! serialize scene data and call those globals.

// Embed the D3 map JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BLOOM_MAP_JS: &str = include_str!("../assets/js/bloom-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HAB JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map scripts with a wait-for-D3 polling loop.
///
/// The map JS defines `renderBloomMap(...)` via `function` declarations.
/// To ensure they become globally accessible (not block-scoped inside the
/// setInterval callback), we evaluate them at global scope via indirect
/// `eval()` once D3 and topojson are ready, then promote each function to
/// `window.*` explicitly.
pub fn init_map() {
    let all_js = [TOOLTIP_JS, BLOOM_MAP_JS].join("\n");

    // Stash the scripts on window so the polling callback can eval them
    // at global scope.
    let store_js = format!(
        "window.__habMapScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof topojson !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__habMapScripts);
                    delete window.__habMapScripts;
                    if (typeof renderBloomMap !== 'undefined') window.renderBloomMap = renderBloomMap;
                    if (typeof destroyBloomMap !== 'undefined') window.destroyBloomMap = destroyBloomMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__habMapReady = true;
                    console.log('HAB map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the bloom map scene into the given container.
///
/// Uses a polling loop to wait for D3.js to load, the map scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_bloom_map(container_id: &str, scene_json: &str, config_json: &str) {
    let escaped_scene = scene_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__habMapReady &&
                    typeof window.renderBloomMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBloomMap('{container_id}', '{escaped_scene}', '{escaped_config}');
                    }} catch(e) {{ console.error('[HAB] renderBloomMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up the map in the given container.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
