pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("menu_dashboard", "Visión General"),
    ("menu_performance", "Rendimiento & Logs"),
    ("menu_evergreen", "Evergreen (SEO)"),
    ("menu_sources", "Fuentes RSS"),
    ("menu_settings", "Configuración"),
    ("menu_manual", "Manual del Usuario"),
    ("btn_policies", "Políticas & Datos"),
    ("menu_review", "Historial & Revisión"),
    ("dash_title", "Visión General"),
    ("log_title", "Registro de Ejecución Compilado"),
    ("btn_start", "Iniciar"),
    ("btn_pause", "Pausar"),
    ("btn_stop", "Detener"),
    // Help popovers
    ("help_perf", "Monitorea los recursos del sistema (CPU/RAM) y la configuración central de S1M0N."),
    ("help_evergreen", "Genera artículos en profundidad sobre temas atemporales (sin necesidad de noticias recientes)."),
    ("help_rss", "Gestiona tus fuentes de noticias. Agrega feeds RSS de sitios confiables aquí."),
    ("help_settings", "Configura tus claves de API y conexiones."),
    ("help_google", "Configura tus credenciales de Google Cloud (Vertex AI para imágenes) y YouTube Data API."),
    ("help_news", "Gestiona las claves de API de tus proveedores de noticias (GNews, NewsAPI, Currents)."),
    ("help_wp", "Conecta tu sitio WordPress. Usa la URL completa, el usuario y una Contraseña de Aplicación (no la de inicio de sesión)."),
    ("help_cp", "Controles avanzados: logs, modo seguro, timeouts y manejo de errores."),
    // Stats
    ("stat_total_label", "Total Publicados"),
    ("stat_today_label", "Generados Hoy"),
    ("stat_pending_label", "Cola de Aprobación"),
    ("stat_cache_label", "Ahorro por Caché"),
    ("stat_total_tooltip", "Conteo absoluto de artículos enviados a WordPress desde el inicio."),
    ("stat_today_tooltip", "Artículos generados en las últimas 24 horas (ciclo diario)."),
    ("stat_pending_tooltip", "Artículos esperando revisión manual antes de su publicación."),
    ("stat_cache_tooltip", "Número de solicitudes API ahorradas por estar en caché."),
    // Tooltips
    ("tt_start", "Inicia el ciclo continuo de monitoreo de RSS y generación de artículos."),
    ("tt_pause", "Pausa temporalmente el ciclo. El proceso actual terminará antes de detenerse."),
    ("tt_stop", "Interrumpe todos los procesos inmediatamente."),
    ("tt_refresh", "Actualiza los datos de la pantalla manualmente (útil si falla la actualización automática)."),
    ("tt_logs_clear", "Borra el registro visual de logs (no afecta el archivo de log en disco)."),
    ("tt_add_feed", "Agrega una nueva URL de Feed RSS para monitoreo."),
    ("tt_del_sources", "Elimina TODAS las fuentes registradas de la base de datos."),
    ("tt_save_all", "Guarda toda la configuración de API, WordPress y preferencias en la base local."),
    ("tt_cycles", "Define el intervalo de tiempo (en minutos) entre las búsquedas automáticas de contenido."),
    ("tt_clear_hist", "Borra permanentemente el historial de artículos generados y los datos de rendimiento."),
    ("tt_optimize", "Ejecuta limpieza de memoria RAM y compactación de base de datos (SQLite Vacuum)."),
    ("tt_google_proj", "ID del Proyecto en Google Cloud (necesario para Vertex AI)."),
    ("tt_gemini_key", "Clave API de Google AI Studio (Gemini 1.5)."),
    ("tt_yt_key", "Clave API de YouTube Data v3 para buscar videos relacionados."),
    ("tt_news_key", "Clave API del servicio de noticias elegido (GNews, NewsAPI o Currents)."),
    ("tt_wp_url", "Dirección completa de tu sitio WordPress (https://...)."),
    ("tt_wp_user", "Nombre de usuario de WordPress con permiso de editor/admin."),
    ("tt_wp_pass", "Contraseña de Aplicación (no la de inicio de sesión). Genérala en Usuarios > Perfil."),
    ("tt_pub_mode", "Define si el artículo se publica directamente o queda como Borrador para revisión."),
    ("tt_manual_rev", "Si está activado, bloquea el envío automático y coloca los artículos en la cola de 'Revisión'."),
    // Titles and buttons
    ("sec_google_title", "Ecosistema Google (Vertex/Gemini)"),
    ("sec_news_title", "Fuentes de Noticias y RSS"),
    ("sec_wp_title", "Integración WordPress"),
    ("cp_title", "Panel de Control Central"),
    ("btn_generate", "Generar Tema Ahora"),
    ("btn_save_all", "Guardar Configuración"),
    ("btn_optimize", "Optimizar Sistema"),
    ("btn_clear_global", "Reiniciar Historiales"),
    ("btn_delete_sources_txt", "Borrar Fuentes"),
    ("hist_opt_title", "Logs de Optimización"),
    ("hist_gen_title", "Historial de Publicaciones"),
    ("rss_manager_title", "Gestor de Feeds"),
    ("rss_modal_title", "Nuevo Feed RSS"),
    ("btn_use_gnews", "Activar GNews"),
    ("btn_use_newsapi", "Activar NewsAPI"),
    ("btn_use_currents", "Activar Currents"),
    ("footer_copy", "Desarrollado por Cogitari"),
    ("tg_images", "Generar Imágenes (Vertex AI)"),
    ("tg_videos", "Buscar Videos (YouTube)"),
    ("tg_review", "Revisión Humana Obligatoria"),
    ("btn_categories", "Filtrar Categorías"),
    ("btn_apply", "Aplicar"),
    ("btn_apply_perf", "Actualizar Núcleo"),
    ("btn_save", "Confirmar"),
    ("btn_save_rss", "Agregar Feed"),
    ("btn_add_feed", "Agregar Fuente"),
    ("btn_cancel", "Cancelar"),
    ("btn_confirm", "Confirmar"),
    ("btn_close", "Cerrar"),
    ("btn_refresh", "Actualizar"),
    ("btn_clear_logs", "Limpiar"),
    ("btn_approve", "Aprobar"),
    ("btn_reject", "Rechazar"),
    // Placeholders
    ("ph_google_project", "Ej: my-project-id-123"),
    ("ph_wp_url", "Ej: https://miblog.com"),
    ("ph_rss_name", "Ej: CNN Tech"),
    ("ph_rss_theme", "Ej: Tecnología"),
    ("ph_rss_url", "https://..."),
    ("ph_evergreen", "Ej: Beneficios de la meditación en la productividad..."),
    ("ph_key", "Pega tu clave API aquí..."),
    ("ph_user", "admin"),
    // Table headers
    ("th_date", "Fecha de Procesamiento"),
    ("th_action", "Acción Ejecutada"),
    ("th_status", "Estado Actual"),
    ("th_title", "Título del Artículo"),
    ("th_cat", "Etiquetas/Categorías"),
    ("th_active", "Monitoreando"),
    ("th_name", "Nombre de la Fuente"),
    ("th_url", "Dirección del Feed"),
    ("th_theme", "Tema"),
    // Cycle modal
    ("btn_cycle", "Ciclos de Ejecución"),
    ("modal_cycle_title", "Configuración de Intervalos"),
    ("lbl_cycle_interval", "Intervalo entre Búsquedas (minutos)"),
    ("cycle_info", "Recomendado: 120min para evitar límites de la API (Error 429). Mínimo seguro: 30min."),
    // Settings
    ("lbl_pub_mode", "Modo de Publicación en WP"),
    ("opt_auto", "Publicación Automática (En vivo)"),
    ("opt_draft", "Guardar como Borrador"),
    ("opt_manual", "Retener para Revisión"),
    ("review_title", "Cola de Moderación"),
    ("input_topic", "Tema para Artículo Evergreen (Atemporal)"),
    ("lbl_frequency", "Frecuencia (Ciclos)"),
    ("lbl_ai_threads", "Velocidad (Threads)"),
    ("lbl_advanced", "Configuración Avanzada"),
    ("lbl_ai_model", "Modelo de IA"),
    ("opt_model_pro", "Gemini Pro (Calidad)"),
    ("opt_model_flash", "Gemini Flash (Velocidad)"),
    ("model_invalid", "Clave inválida / Sin modelos"),
    ("lbl_google_project", "Project ID"),
    ("lbl_gemini_key", "Gemini API Key"),
    ("lbl_yt_key", "YouTube API Key"),
    ("lbl_gnews_key", "GNews API Key"),
    ("lbl_newsapi_key", "NewsAPI Key"),
    ("lbl_currents_key", "Currents API Key"),
    ("lbl_wp_url", "URL del Sitio"),
    ("lbl_wp_user", "Usuario"),
    ("lbl_wp_pass", "Contraseña de Aplicación"),
    ("lbl_language", "Idioma"),
    ("lbl_dark_mode", "Modo Oscuro"),
    ("field_invalid", "Inválido"),
    // Performance
    ("perf_cpu", "CPU"),
    ("perf_ram", "RAM"),
    ("perf_disk", "Disco"),
    ("opt_action", "Optimización"),
    // Review and history
    ("review_pending_title", "Pendiente de Aprobación"),
    ("review_awaiting", "EN ESPERA"),
    ("review_none", "No hay revisiones pendientes."),
    ("review_today_title", "Generados Hoy"),
    ("review_empty", "Vacío."),
    ("hist_untitled", "Sin Título"),
    ("hist_success", "Éxito"),
    ("hist_detail_title", "Detalles de la Sesión"),
    ("hist_recent_topics", "Temas Recientes"),
    ("loading", "Cargando..."),
    // Status
    ("status_ready", "Sistema Listo"),
    ("status_not_ready", "Sistema No Listo"),
    // Confirmations
    ("modal_confirm_title", "Confirmación"),
    ("confirm_control", "¿Confirmar acción: {action}?"),
    ("confirm_approve", "¿Aprobar y publicar este artículo?"),
    ("confirm_reject", "¿Rechazar este artículo?"),
    ("confirm_delete_feed", "¿Eliminar esta fuente?"),
    ("confirm_delete_all_feeds", "PELIGRO: ¿Borrar TODAS las fuentes?"),
    ("confirm_clear_history", "¿Limpiar este historial?"),
    ("confirm_clear_all", "ATENCIÓN: ¿Borrar TODOS los historiales locales?"),
    ("confirm_optimize", "¿Optimizar S1M0N (Limpieza Profunda)?"),
    // Notifications
    ("toast_system", "Sistema: {action}"),
    ("toast_approved", "¡Artículo aprobado y publicado!"),
    ("toast_rejected", "Artículo rechazado."),
    ("toast_feed_removed", "Fuente eliminada."),
    ("toast_feeds_removed", "Todas las fuentes fueron eliminadas."),
    ("toast_history_cleared", "Historial limpiado."),
    ("toast_histories_cleared", "Todos los historiales fueron borrados."),
    ("toast_settings_saved", "¡Configuración guardada con éxito!"),
    ("toast_perf_applied", "¡Parámetros de rendimiento aplicados!"),
    ("toast_cycle_updated", "Ciclo de automatización actualizado."),
    ("toast_evergreen_started", "¡Generación Evergreen iniciada!"),
    ("toast_optimized", "¡Sistema optimizado con éxito!"),
    ("toast_command_sent", "Comando enviado."),
    // Manual
    ("man_intro_t", "1. Bienvenido a S1M0N"),
    (
        "man_intro_d",
        r#"<p><strong>S1M0N</strong> es un orquestador de contenido autónomo. Reemplaza un equipo editorial básico al automatizar:</p>
<ul>
  <li><strong>Pauta:</strong> Monitorea el mundo real vía RSS/News APIs.</li>
  <li><strong>Redacción:</strong> Usa LLMs (Gemini) para escribir artículos originales basados en hechos.</li>
  <li><strong>Multimedia:</strong> Crea imágenes y busca videos automáticamente.</li>
  <li><strong>Distribución:</strong> Publica en tu WordPress.</li>
</ul>"#,
    ),
    ("man_setup_t", "2. Obteniendo las Claves (Paso a Paso)"),
    (
        "man_setup_d",
        r#"<h4>Ecosistema Google (Vital)</h4>
<ol>
  <li>Accede a la <a href="https://console.cloud.google.com/" target="_blank">Google Cloud Console</a>.</li>
  <li>Crea un Nuevo Proyecto y anota el <strong>Project ID</strong>.</li>
  <li>En "APIs y Servicios", activa <strong>Vertex AI API</strong> (para imágenes) y <strong>YouTube Data API v3</strong>.</li>
  <li>Accede a <a href="https://aistudio.google.com/" target="_blank">Google AI Studio</a> y genera una clave para <strong>Gemini 1.5</strong>.</li>
</ol>
<h4>WordPress (Conexión)</h4>
<p>¡No uses tu contraseña de inicio de sesión!</p>
<ol>
  <li>En el panel de WP, ve a <strong>Usuarios &gt; Perfil</strong>.</li>
  <li>Desplázate hasta "Contraseñas de Aplicación".</li>
  <li>Nómbrala "S1M0N" y haz clic en "Añadir nueva".</li>
  <li>Copia la contraseña generada y pégala en el campo "Pass" de S1M0N.</li>
</ol>
<h4>Fuentes de Noticias y RSS</h4>
<p><strong>Para APIs de Noticias:</strong> Crea una cuenta gratuita en uno de los servicios compatibles:</p>
<ul>
  <li><a href="https://gnews.io/" target="_blank">GNews.io</a></li>
  <li><a href="https://newsapi.org/" target="_blank">NewsAPI.org</a></li>
  <li><a href="https://currentsapi.services/" target="_blank">CurrentsAPI</a></li>
</ul>
<p><strong>Para RSS:</strong> La mayoría de los sitios modernos tiene un feed. Intenta agregar <code>/feed</code> al final de la URL (ej: <code>misitio.com/feed</code>) o busca el ícono naranja de RSS.</p>"#,
    ),
    ("man_gen_t", "3. Operación y Estado"),
    (
        "man_gen_d",
        r#"<p><strong>Interpretación del Estado:</strong></p>
<ul>
  <li><span class="badge bg-secondary">STOPPED</span> El sistema está inactivo. No ocurre nada.</li>
  <li><span class="badge bg-success">RUNNING</span> El sistema está activo. Despertará cada X minutos (configurado en Ciclos) para buscar novedades.</li>
  <li><span class="badge bg-warning">PAUSED</span> El sistema no iniciará nuevos ciclos, pero los procesos en curso terminarán.</li>
</ul>"#,
    ),
    // Policies
    ("pol_title", "Centro de Cumplimiento"),
    ("pol_priv_t", "Privacidad y Tratamiento de Datos"),
    (
        "pol_priv_d",
        r#"<div class="alert alert-success"><strong>Soberanía de Datos</strong></div>
<p>S1M0N opera bajo el principio <strong>Local-First</strong> (Primero Local):</p>
<ul>
  <li><strong>Credenciales:</strong> Tus claves de API y contraseñas JAMÁS se envían a "la nube de S1M0N" ni a terceros ajenos a la transacción. Residen solo en el archivo <code>s1m0n.db</code> de tu disco duro.</li>
  <li><strong>Contenido:</strong> El texto de las noticias leídas se envía a la API de Google (Gemini) para su procesamiento. Google afirma no usar datos de la API de pago para entrenar modelos por defecto.</li>
  <li><strong>Logs:</strong> Los registros de errores y aciertos quedan en tu máquina.</li>
</ul>"#,
    ),
    ("pol_terms_t", "Términos de Uso"),
    (
        "pol_terms_d",
        r#"<p>Al utilizar este software, aceptas que:</p>
<ol>
  <li>La responsabilidad final por el contenido publicado es del Editor Humano. Las IAs pueden alucinar.</li>
  <li>El uso de APIs (YouTube, GNews) está sujeto a los Términos de Servicio de esas plataformas.</li>
  <li>S1M0N es una herramienta de productividad. Debes poseer los derechos de uso de los feeds RSS que agregues.</li>
  <li>El contenido generado debe revisarse para garantizar el cumplimiento legal y ético.</li>
</ol>"#,
    ),
    // Errors
    ("err_generic", "Error de conexión."),
    ("err_browser", "Navegador incompatible."),
    ("err_history", "Error al leer el historial."),
    ("err_save", "Error al guardar."),
    ("err_model_save", "Error al guardar el modelo de IA."),
    ("sec_alert", "No es posible copiar/pegar desde este campo."),
];
