pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("menu_dashboard", "Overview"),
    ("menu_performance", "Performance & Logs"),
    ("menu_evergreen", "Evergreen (SEO)"),
    ("menu_sources", "RSS Sources"),
    ("menu_settings", "Settings"),
    ("menu_manual", "User Manual"),
    ("btn_policies", "Policies & Data"),
    ("menu_review", "History & Review"),
    ("dash_title", "Overview"),
    ("log_title", "Compiled Execution Log"),
    ("btn_start", "Start"),
    ("btn_pause", "Pause"),
    ("btn_stop", "Stop"),
    // Help popovers
    ("help_perf", "Monitors system resources (CPU/RAM) and core S1M0N settings."),
    ("help_evergreen", "Generates in-depth articles on timeless topics (no recent news required)."),
    ("help_rss", "Manage your news sources. Add RSS feeds from trusted sites here."),
    ("help_settings", "Configure your API keys and connections."),
    ("help_google", "Configure your Google Cloud credentials (Vertex AI for images) and YouTube Data API."),
    ("help_news", "Manage the API keys for your news providers (GNews, NewsAPI, Currents)."),
    ("help_wp", "Connect your WordPress site. Use the full URL, username and an Application Password (not your login)."),
    ("help_cp", "Advanced controls: logs, safe mode, timeouts and error handling."),
    // Stats
    ("stat_total_label", "Total Published"),
    ("stat_today_label", "Generated Today"),
    ("stat_pending_label", "Approval Queue"),
    ("stat_cache_label", "Cache Savings"),
    ("stat_total_tooltip", "Absolute count of articles sent to WordPress since the beginning."),
    ("stat_today_tooltip", "Articles generated in the last 24 hours (daily cycle)."),
    ("stat_pending_tooltip", "Articles awaiting manual review before publishing."),
    ("stat_cache_tooltip", "Number of API requests saved by being cached."),
    // Tooltips
    ("tt_start", "Starts the continuous RSS monitoring and article generation cycle."),
    ("tt_pause", "Temporarily pauses the cycle. The current process finishes before stopping."),
    ("tt_stop", "Stops all processes immediately."),
    ("tt_refresh", "Refreshes the screen data manually (useful if auto-refresh fails)."),
    ("tt_logs_clear", "Clears the visual log view (does not affect the log file on disk)."),
    ("tt_add_feed", "Adds a new RSS feed URL for monitoring."),
    ("tt_del_sources", "Removes ALL registered sources from the database."),
    ("tt_save_all", "Saves all API, WordPress and preference settings to the local database."),
    ("tt_cycles", "Set the time interval (in minutes) between automatic content fetches."),
    ("tt_clear_hist", "Permanently deletes the generated article history and performance data."),
    ("tt_optimize", "Runs RAM cleanup and database compaction (SQLite Vacuum)."),
    ("tt_google_proj", "Google Cloud Project ID (required for Vertex AI)."),
    ("tt_gemini_key", "Google AI Studio API key (Gemini 1.5)."),
    ("tt_yt_key", "YouTube Data v3 API key used to find related videos."),
    ("tt_news_key", "API key of the chosen news service (GNews, NewsAPI or Currents)."),
    ("tt_wp_url", "Full address of your WordPress site (https://...)."),
    ("tt_wp_user", "WordPress username with editor/admin permission."),
    ("tt_wp_pass", "Application Password (not the login password). Generate it under Users > Profile."),
    ("tt_pub_mode", "Defines whether the article goes live immediately or stays as a Draft for review."),
    ("tt_manual_rev", "When enabled, blocks automatic publishing and places articles in the 'Review' queue."),
    // Titles and buttons
    ("sec_google_title", "Google Ecosystem (Vertex/Gemini)"),
    ("sec_news_title", "News Sources and RSS"),
    ("sec_wp_title", "WordPress Integration"),
    ("cp_title", "Central Control Panel"),
    ("btn_generate", "Generate Topic Now"),
    ("btn_save_all", "Save Settings"),
    ("btn_optimize", "Optimize System"),
    ("btn_clear_global", "Reset Histories"),
    ("btn_delete_sources_txt", "Delete Sources"),
    ("hist_opt_title", "Optimization Logs"),
    ("hist_gen_title", "Publication History"),
    ("rss_manager_title", "Feed Manager"),
    ("rss_modal_title", "New RSS Feed"),
    ("btn_use_gnews", "Enable GNews"),
    ("btn_use_newsapi", "Enable NewsAPI"),
    ("btn_use_currents", "Enable Currents"),
    ("footer_copy", "Developed by Cogitari"),
    ("tg_images", "Generate Images (Vertex AI)"),
    ("tg_videos", "Find Videos (YouTube)"),
    ("tg_review", "Mandatory Human Review"),
    ("btn_categories", "Filter Categories"),
    ("btn_apply", "Apply"),
    ("btn_apply_perf", "Update Core"),
    ("btn_save", "Confirm"),
    ("btn_save_rss", "Add Feed"),
    ("btn_add_feed", "Add Source"),
    ("btn_cancel", "Cancel"),
    ("btn_confirm", "Confirm"),
    ("btn_close", "Close"),
    ("btn_refresh", "Refresh"),
    ("btn_clear_logs", "Clear"),
    ("btn_approve", "Approve"),
    ("btn_reject", "Reject"),
    // Placeholders
    ("ph_google_project", "e.g. my-project-id-123"),
    ("ph_wp_url", "e.g. https://myblog.com"),
    ("ph_rss_name", "e.g. CNN Tech"),
    ("ph_rss_theme", "e.g. Technology"),
    ("ph_rss_url", "https://..."),
    ("ph_evergreen", "e.g. Benefits of meditation for productivity..."),
    ("ph_key", "Paste your API key here..."),
    ("ph_user", "admin"),
    // Table headers
    ("th_date", "Processing Date"),
    ("th_action", "Action Performed"),
    ("th_status", "Current State"),
    ("th_title", "Article Title"),
    ("th_cat", "Tags/Categories"),
    ("th_active", "Monitoring"),
    ("th_name", "Source Name"),
    ("th_url", "Feed Address"),
    ("th_theme", "Theme"),
    // Cycle modal
    ("btn_cycle", "Execution Cycles"),
    ("modal_cycle_title", "Interval Settings"),
    ("lbl_cycle_interval", "Interval between Fetches (minutes)"),
    ("cycle_info", "Recommended: 120min to avoid API rate limits (Error 429). Safe minimum: 30min."),
    // Settings
    ("lbl_pub_mode", "WP Publishing Mode"),
    ("opt_auto", "Automatic Publishing (Live)"),
    ("opt_draft", "Save as Draft"),
    ("opt_manual", "Hold for Review"),
    ("review_title", "Moderation Queue"),
    ("input_topic", "Topic for Evergreen (Timeless) Article"),
    ("lbl_frequency", "Frequency (Cycles)"),
    ("lbl_ai_threads", "Speed (Threads)"),
    ("lbl_advanced", "Advanced Settings"),
    ("lbl_ai_model", "AI Model"),
    ("opt_model_pro", "Gemini Pro (Quality)"),
    ("opt_model_flash", "Gemini Flash (Speed)"),
    ("model_invalid", "Invalid key / No models"),
    ("lbl_google_project", "Project ID"),
    ("lbl_gemini_key", "Gemini API Key"),
    ("lbl_yt_key", "YouTube API Key"),
    ("lbl_gnews_key", "GNews API Key"),
    ("lbl_newsapi_key", "NewsAPI Key"),
    ("lbl_currents_key", "Currents API Key"),
    ("lbl_wp_url", "Site URL"),
    ("lbl_wp_user", "Username"),
    ("lbl_wp_pass", "Application Password"),
    ("lbl_language", "Language"),
    ("lbl_dark_mode", "Dark Mode"),
    ("field_invalid", "Invalid"),
    // Performance
    ("perf_cpu", "CPU"),
    ("perf_ram", "RAM"),
    ("perf_disk", "Disk"),
    ("opt_action", "Optimization"),
    // Review and history
    ("review_pending_title", "Pending Approval"),
    ("review_awaiting", "AWAITING"),
    ("review_none", "No pending reviews."),
    ("review_today_title", "Generated Today"),
    ("review_empty", "Empty."),
    ("hist_untitled", "Untitled"),
    ("hist_success", "Success"),
    ("hist_detail_title", "Session Details"),
    ("hist_recent_topics", "Recent Topics"),
    ("loading", "Loading..."),
    // Status
    ("status_ready", "System Ready"),
    ("status_not_ready", "System Not Ready"),
    // Confirmations
    ("modal_confirm_title", "Confirmation"),
    ("confirm_control", "Confirm action: {action}?"),
    ("confirm_approve", "Approve and publish this article?"),
    ("confirm_reject", "Reject this article?"),
    ("confirm_delete_feed", "Remove this source?"),
    ("confirm_delete_all_feeds", "DANGER: Delete ALL sources?"),
    ("confirm_clear_history", "Clear this history?"),
    ("confirm_clear_all", "WARNING: Delete ALL local histories?"),
    ("confirm_optimize", "Optimize S1M0N (Deep Cleanup)?"),
    // Notifications
    ("toast_system", "System: {action}"),
    ("toast_approved", "Article approved and published!"),
    ("toast_rejected", "Article rejected."),
    ("toast_feed_removed", "Source removed."),
    ("toast_feeds_removed", "All sources were removed."),
    ("toast_history_cleared", "History cleared."),
    ("toast_histories_cleared", "All histories were deleted."),
    ("toast_settings_saved", "Settings saved successfully!"),
    ("toast_perf_applied", "Performance parameters applied!"),
    ("toast_cycle_updated", "Automation cycle updated."),
    ("toast_evergreen_started", "Evergreen generation started!"),
    ("toast_optimized", "System optimized successfully!"),
    ("toast_command_sent", "Command sent."),
    // Manual
    ("man_intro_t", "1. Welcome to S1M0N"),
    (
        "man_intro_d",
        r#"<p><strong>S1M0N</strong> is an autonomous content orchestrator. It replaces a basic editorial team by automating:</p>
<ul>
  <li><strong>Sourcing:</strong> Monitors the real world through RSS/News APIs.</li>
  <li><strong>Writing:</strong> Uses LLMs (Gemini) to write original, fact-based articles.</li>
  <li><strong>Multimedia:</strong> Creates images and finds videos automatically.</li>
  <li><strong>Distribution:</strong> Publishes to your WordPress.</li>
</ul>"#,
    ),
    ("man_setup_t", "2. Getting the Keys (Step by Step)"),
    (
        "man_setup_d",
        r#"<h4>Google Ecosystem (Vital)</h4>
<ol>
  <li>Open the <a href="https://console.cloud.google.com/" target="_blank">Google Cloud Console</a>.</li>
  <li>Create a New Project and note the <strong>Project ID</strong>.</li>
  <li>Under "APIs &amp; Services", enable <strong>Vertex AI API</strong> (for images) and <strong>YouTube Data API v3</strong>.</li>
  <li>Open <a href="https://aistudio.google.com/" target="_blank">Google AI Studio</a> and generate a key for <strong>Gemini 1.5</strong>.</li>
</ol>
<h4>WordPress (Connection)</h4>
<p>Do not use your login password!</p>
<ol>
  <li>In the WP dashboard, go to <strong>Users &gt; Profile</strong>.</li>
  <li>Scroll down to "Application Passwords".</li>
  <li>Name it "S1M0N" and click "Add New".</li>
  <li>Copy the generated password and paste it into the "Pass" field in S1M0N.</li>
</ol>
<h4>News Sources and RSS</h4>
<p><strong>For News APIs:</strong> Create a free account on one of the supported services:</p>
<ul>
  <li><a href="https://gnews.io/" target="_blank">GNews.io</a></li>
  <li><a href="https://newsapi.org/" target="_blank">NewsAPI.org</a></li>
  <li><a href="https://currentsapi.services/" target="_blank">CurrentsAPI</a></li>
</ul>
<p><strong>For RSS:</strong> Most modern sites have a feed. Try adding <code>/feed</code> to the end of the URL (e.g. <code>mysite.com/feed</code>) or look for the orange RSS icon.</p>"#,
    ),
    ("man_gen_t", "3. Operation and Status"),
    (
        "man_gen_d",
        r#"<p><strong>Reading the Status:</strong></p>
<ul>
  <li><span class="badge bg-secondary">STOPPED</span> The system is idle. Nothing happens.</li>
  <li><span class="badge bg-success">RUNNING</span> The system is active. It wakes up every X minutes (set in Cycles) to look for news.</li>
  <li><span class="badge bg-warning">PAUSED</span> The system will not start new cycles, but running processes will finish.</li>
</ul>"#,
    ),
    // Policies
    ("pol_title", "Compliance Center"),
    ("pol_priv_t", "Privacy and Data Handling"),
    (
        "pol_priv_d",
        r#"<div class="alert alert-success"><strong>Data Sovereignty</strong></div>
<p>S1M0N operates on the <strong>Local-First</strong> principle:</p>
<ul>
  <li><strong>Credentials:</strong> Your API keys and passwords are NEVER sent to "the S1M0N cloud" or to third parties not involved in the transaction. They live only in the <code>s1m0n.db</code> file on your hard drive.</li>
  <li><strong>Content:</strong> The text of the news read is sent to Google's API (Gemini) for processing. Google states it does not use paid API data to train models by default.</li>
  <li><strong>Logs:</strong> Error and success records stay on your machine.</li>
</ul>"#,
    ),
    ("pol_terms_t", "Terms of Use"),
    (
        "pol_terms_d",
        r#"<p>By using this software, you agree that:</p>
<ol>
  <li>Final responsibility for published content lies with the Human Editor. AIs can hallucinate.</li>
  <li>Use of APIs (YouTube, GNews) is subject to those platforms' Terms of Service.</li>
  <li>S1M0N is a productivity tool. You must hold the usage rights to the RSS feeds you add.</li>
  <li>Generated content must be reviewed to ensure legal and ethical compliance.</li>
</ol>"#,
    ),
    // Errors
    ("err_generic", "Connection error."),
    ("err_browser", "Incompatible browser."),
    ("err_history", "Error reading history."),
    ("err_save", "Error saving."),
    ("err_model_save", "Error saving the AI model."),
    ("sec_alert", "Copying/pasting from this field is not allowed."),
];
