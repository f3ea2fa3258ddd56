pub(super) const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("menu_dashboard", "Visão Geral"),
    ("menu_performance", "Performance & Logs"),
    ("menu_evergreen", "Evergreen (SEO)"),
    ("menu_sources", "Fontes RSS"),
    ("menu_settings", "Configurações"),
    ("menu_manual", "Manual do Usuário"),
    ("btn_policies", "Políticas & Dados"),
    ("menu_review", "Histórico & Revisão"),
    ("dash_title", "Visão Geral"),
    ("log_title", "Registro de Execução Compilado"),
    ("btn_start", "Iniciar"),
    ("btn_pause", "Pausar"),
    ("btn_stop", "Parar"),
    // Help popovers
    ("help_perf", "Monitora recursos do sistema (CPU/RAM) e configurações centrais do S1M0N."),
    ("help_evergreen", "Gera artigos aprofundados sobre tópicos atemporais (sem necessidade de notícias recentes)."),
    ("help_rss", "Gerencia suas fontes de notícias. Adicione feeds RSS de sites confiáveis aqui."),
    ("help_settings", "Configure suas chaves de API e conexões."),
    ("help_google", "Configure suas credenciais do Google Cloud (Vertex AI p/ Imagens) e YouTube Data API."),
    ("help_news", "Gerencie as chaves de API para seus provedores de notícias (GNews, NewsAPI, Currents)."),
    ("help_wp", "Conecte seu site WordPress. Use URL completa, usuário e Senha de Aplicação (não a de login)."),
    ("help_cp", "Controles avançados: Logs, Modo Seguro, Timeouts e tratamento de erros."),
    // Stats
    ("stat_total_label", "Total de Publicados"),
    ("stat_today_label", "Gerados Hoje"),
    ("stat_pending_label", "Fila de Aprovação"),
    ("stat_cache_label", "Economia via Cache"),
    ("stat_total_tooltip", "Contagem absoluta de artigos enviados ao WordPress desde o início."),
    ("stat_today_tooltip", "Artigos gerados nas últimas 24 horas (ciclo diário)."),
    ("stat_pending_tooltip", "Artigos aguardando revisão manual antes da publicação."),
    ("stat_cache_tooltip", "Número de requisições API economizadas por estarem em cache."),
    // Tooltips
    ("tt_start", "Inicia o ciclo contínuo de monitoramento de RSS e geração de artigos."),
    ("tt_pause", "Pausa temporariamente o ciclo. O processo atual será concluído antes de parar."),
    ("tt_stop", "Interrompe todos os processos imediatamente."),
    ("tt_refresh", "Atualiza os dados da tela manualmente (útil se o auto-refresh falhar)."),
    ("tt_logs_clear", "Apaga o registro visual de logs (não afeta o arquivo de log no disco)."),
    ("tt_add_feed", "Adiciona uma nova URL de Feed RSS para monitoramento."),
    ("tt_del_sources", "Remove TODAS as fontes cadastradas do banco de dados."),
    ("tt_save_all", "Salva todas as configurações de API, WordPress e preferências no banco local."),
    ("tt_cycles", "Defina o intervalo de tempo (em minutos) entre as buscas automáticas de conteúdo."),
    ("tt_clear_hist", "Apaga permanentemente o histórico de artigos gerados e dados de performance."),
    ("tt_optimize", "Executa limpeza de memória RAM e compactação de banco de dados (SQLite Vacuum)."),
    ("tt_google_proj", "ID do Projeto no Google Cloud (necessário para Vertex AI)."),
    ("tt_gemini_key", "Chave API do Google AI Studio (Gemini 1.5)."),
    ("tt_yt_key", "Chave API do YouTube Data v3 para buscar vídeos relacionados."),
    ("tt_news_key", "Chave API do serviço de notícias escolhido (GNews, NewsAPI ou Currents)."),
    ("tt_wp_url", "Endereço completo do seu site WordPress (https://...)."),
    ("tt_wp_user", "Nome de usuário do WordPress com permissão de editor/admin."),
    ("tt_wp_pass", "Senha de Aplicação (não a senha de login). Gere em Usuários > Perfil."),
    ("tt_pub_mode", "Define se o artigo vai direto ao ar ou fica como Rascunho para revisão."),
    ("tt_manual_rev", "Se ativado, bloqueia envio automático e coloca na fila de 'Revisão'."),
    // Titles and buttons
    ("sec_google_title", "Ecossistema Google (Vertex/Gemini)"),
    ("sec_news_title", "Fontes de Notícias e RSS"),
    ("sec_wp_title", "Integração WordPress"),
    ("cp_title", "Painel de Controle Central"),
    ("btn_generate", "Gerar Tópico Agora"),
    ("btn_save_all", "Salvar Configurações"),
    ("btn_optimize", "Otimizar Sistema"),
    ("btn_clear_global", "Resetar Históricos"),
    ("btn_delete_sources_txt", "Apagar Fontes"),
    ("hist_opt_title", "Logs de Otimização"),
    ("hist_gen_title", "Histórico de Publicações"),
    ("rss_manager_title", "Gerenciador de Feeds"),
    ("rss_modal_title", "Novo Feed RSS"),
    ("btn_use_gnews", "Ativar GNews"),
    ("btn_use_newsapi", "Ativar NewsAPI"),
    ("btn_use_currents", "Ativar Currents"),
    ("footer_copy", "Desenvolvido por Cogitari"),
    ("tg_images", "Gerar Imagens (Vertex AI)"),
    ("tg_videos", "Buscar Vídeos (YouTube)"),
    ("tg_review", "Revisão Humana Obrigatória"),
    ("btn_categories", "Filtrar Categorias"),
    ("btn_apply", "Aplicar"),
    ("btn_apply_perf", "Atualizar Núcleo"),
    ("btn_save", "Confirmar"),
    ("btn_save_rss", "Adicionar Feed"),
    ("btn_add_feed", "Adicionar Fonte"),
    ("btn_cancel", "Cancelar"),
    ("btn_confirm", "Confirmar"),
    ("btn_close", "Fechar"),
    ("btn_refresh", "Atualizar"),
    ("btn_clear_logs", "Limpar"),
    ("btn_approve", "Aprovar"),
    ("btn_reject", "Rejeitar"),
    // Placeholders
    ("ph_google_project", "Ex: my-project-id-123"),
    ("ph_wp_url", "Ex: https://meublog.com"),
    ("ph_rss_name", "Ex: CNN Tech"),
    ("ph_rss_theme", "Ex: Tecnologia"),
    ("ph_rss_url", "https://..."),
    ("ph_evergreen", "Ex: Benefícios da Meditação na produtividade..."),
    ("ph_key", "Cole sua chave API aqui..."),
    ("ph_user", "admin"),
    // Table headers
    ("th_date", "Data de Processamento"),
    ("th_action", "Ação Executada"),
    ("th_status", "Estado Atual"),
    ("th_title", "Título do Artigo"),
    ("th_cat", "Tags/Categorias"),
    ("th_active", "Monitorando"),
    ("th_name", "Nome da Fonte"),
    ("th_url", "Endereço do Feed"),
    ("th_theme", "Tema"),
    // Cycle modal
    ("btn_cycle", "Ciclos de Execução"),
    ("modal_cycle_title", "Configuração de Intervalos"),
    ("lbl_cycle_interval", "Intervalo entre Buscas (minutos)"),
    ("cycle_info", "Recomendado: 120min para evitar API Rate Limits (Erro 429). Mínimo seguro: 30min."),
    // Settings
    ("lbl_pub_mode", "Modo de Publicação no WP"),
    ("opt_auto", "Publicação Automática (Ao vivo)"),
    ("opt_draft", "Salvar como Rascunho"),
    ("opt_manual", "Reter para Revisão"),
    ("review_title", "Fila de Moderação"),
    ("input_topic", "Tópico para Artigo Evergreen (Atemporal)"),
    ("lbl_frequency", "Frequência (Ciclos)"),
    ("lbl_ai_threads", "Velocidade (Threads)"),
    ("lbl_advanced", "Configurações Avançadas"),
    ("lbl_ai_model", "Modelo de IA"),
    ("opt_model_pro", "Gemini Pro (Qualidade)"),
    ("opt_model_flash", "Gemini Flash (Velocidade)"),
    ("model_invalid", "Chave inválida / Sem modelos"),
    ("lbl_google_project", "Project ID"),
    ("lbl_gemini_key", "Gemini API Key"),
    ("lbl_yt_key", "YouTube API Key"),
    ("lbl_gnews_key", "GNews API Key"),
    ("lbl_newsapi_key", "NewsAPI Key"),
    ("lbl_currents_key", "Currents API Key"),
    ("lbl_wp_url", "URL do Site"),
    ("lbl_wp_user", "Usuário"),
    ("lbl_wp_pass", "Senha de Aplicação"),
    ("lbl_language", "Idioma"),
    ("lbl_dark_mode", "Modo Escuro"),
    ("field_invalid", "Inválido"),
    // Performance
    ("perf_cpu", "CPU"),
    ("perf_ram", "RAM"),
    ("perf_disk", "Disco"),
    ("opt_action", "Otimização"),
    // Review and history
    ("review_pending_title", "Pendente de Aprovação"),
    ("review_awaiting", "AGUARDANDO"),
    ("review_none", "Nenhuma revisão pendente."),
    ("review_today_title", "Gerados Hoje"),
    ("review_empty", "Vazio."),
    ("hist_untitled", "Sem Título"),
    ("hist_success", "Sucesso"),
    ("hist_detail_title", "Detalhes da Sessão"),
    ("hist_recent_topics", "Tópicos Recentes"),
    ("loading", "Carregando..."),
    // Status
    ("status_ready", "Sistema Pronto"),
    ("status_not_ready", "Sistema Não Pronto"),
    // Confirmations
    ("modal_confirm_title", "Confirmação"),
    ("confirm_control", "Confirmar ação: {action}?"),
    ("confirm_approve", "Aprovar e publicar este artigo?"),
    ("confirm_reject", "Rejeitar este artigo?"),
    ("confirm_delete_feed", "Remover esta fonte?"),
    ("confirm_delete_all_feeds", "PERIGO: Apagar TODAS as fontes?"),
    ("confirm_clear_history", "Limpar este histórico?"),
    ("confirm_clear_all", "ATENÇÃO: Apagar TODOS os históricos locais?"),
    ("confirm_optimize", "Otimizar o S1M0N (Limpeza Profunda)?"),
    // Notifications
    ("toast_system", "Sistema: {action}"),
    ("toast_approved", "Artigo aprovado e publicado!"),
    ("toast_rejected", "Artigo rejeitado."),
    ("toast_feed_removed", "Fonte removida."),
    ("toast_feeds_removed", "Todas as fontes foram removidas."),
    ("toast_history_cleared", "Histórico limpo."),
    ("toast_histories_cleared", "Todos os históricos foram apagados."),
    ("toast_settings_saved", "Configurações salvas com sucesso!"),
    ("toast_perf_applied", "Parâmetros de Performance Aplicados!"),
    ("toast_cycle_updated", "Ciclo de automação atualizado."),
    ("toast_evergreen_started", "Geração Evergreen iniciada!"),
    ("toast_optimized", "Sistema Otimizado com Sucesso!"),
    ("toast_command_sent", "Comando enviado."),
    // Manual
    ("man_intro_t", "1. Bem-vindo ao S1M0N"),
    (
        "man_intro_d",
        r#"<p>O <strong>S1M0N</strong> é um orquestrador de conteúdo autônomo. Ele substitui uma equipe editorial básica ao automatizar:</p>
<ul>
  <li><strong>Pauta:</strong> Monitora o mundo real via RSS/News APIs.</li>
  <li><strong>Redação:</strong> Usa LLMs (Gemini) para escrever artigos originais baseados em fatos.</li>
  <li><strong>Multimídia:</strong> Cria imagens e busca vídeos automaticamente.</li>
  <li><strong>Distribuição:</strong> Publica no seu WordPress.</li>
</ul>"#,
    ),
    ("man_setup_t", "2. Obtendo as Chaves (Passo a Passo)"),
    (
        "man_setup_d",
        r#"<h4>Google Ecosystem (Vital)</h4>
<ol>
  <li>Acesse o <a href="https://console.cloud.google.com/" target="_blank">Google Cloud Console</a>.</li>
  <li>Crie um Novo Projeto e anote o <strong>Project ID</strong>.</li>
  <li>No menu "APIs e Serviços", ative: <strong>Vertex AI API</strong> (para imagens) e <strong>YouTube Data API v3</strong>.</li>
  <li>Acesse o <a href="https://aistudio.google.com/" target="_blank">Google AI Studio</a> e gere uma chave para o <strong>Gemini 1.5</strong>.</li>
</ol>
<h4>WordPress (Conexão)</h4>
<p>Não use sua senha de login!</p>
<ol>
  <li>No painel WP, vá em <strong>Usuários &gt; Perfil</strong>.</li>
  <li>Role até o final para "Senhas de Aplicação".</li>
  <li>Nomeie como "S1M0N" e clique em "Adicionar nova".</li>
  <li>Copie a senha gerada e cole no campo "Pass" no S1M0N.</li>
</ol>
<h4>Fontes de Notícias e RSS</h4>
<p><strong>Para APIs de Notícias:</strong> Crie uma conta gratuita em um dos serviços suportados:</p>
<ul>
  <li><a href="https://gnews.io/" target="_blank">GNews.io</a></li>
  <li><a href="https://newsapi.org/" target="_blank">NewsAPI.org</a></li>
  <li><a href="https://currentsapi.services/" target="_blank">CurrentsAPI</a></li>
</ul>
<p><strong>Para RSS:</strong> A maioria dos sites modernos possui um feed. Tente adicionar <code>/feed</code> ao final da URL (ex: <code>meusite.com/feed</code>) ou procure pelo ícone laranja de RSS.</p>"#,
    ),
    ("man_gen_t", "3. Operação e Status"),
    (
        "man_gen_d",
        r#"<p><strong>Interpretação de Status:</strong></p>
<ul>
  <li><span class="badge bg-secondary">STOPPED</span> O sistema está inativo. Nada acontece.</li>
  <li><span class="badge bg-success">RUNNING</span> O sistema está ativo. Ele acordará a cada X minutos (configurado em Ciclos) para buscar novidades.</li>
  <li><span class="badge bg-warning">PAUSED</span> O sistema não iniciará novos ciclos, mas processos em andamento terminarão.</li>
</ul>"#,
    ),
    // Policies
    ("pol_title", "Central de Compliance"),
    ("pol_priv_t", "Privacidade e Tratamento de Dados"),
    (
        "pol_priv_d",
        r#"<div class="alert alert-success"><strong>Soberania de Dados</strong></div>
<p>O S1M0N opera sob o princípio de <strong>Local-First</strong> (Primeiro Local):</p>
<ul>
  <li><strong>Credenciais:</strong> Suas chaves de API e senhas JAMAIS são enviadas para "a nuvem do S1M0N" ou servidores de terceiros não envolvidos na transação. Elas residem apenas no arquivo <code>s1m0n.db</code> no seu disco rígido.</li>
  <li><strong>Conteúdo:</strong> O texto das notícias lidas é enviado à API da Google (Gemini) para processamento. A Google afirma não usar dados de API paga para treinar modelos por padrão.</li>
  <li><strong>Logs:</strong> Os registros de erros e acertos ficam na sua máquina.</li>
</ul>"#,
    ),
    ("pol_terms_t", "Termos de Uso"),
    (
        "pol_terms_d",
        r#"<p>Ao utilizar este software, você concorda que:</p>
<ol>
  <li>A responsabilidade final pelo conteúdo publicado é do Editor Humano. IAs podem alucinar.</li>
  <li>O uso de APIs (YouTube, GNews) está sujeito aos Termos de Serviço dessas plataformas.</li>
  <li>O S1M0N é uma ferramenta de produtividade. Você deve possuir os direitos de uso dos feeds RSS que adiciona.</li>
  <li>O conteúdo gerado deve ser revisado para garantir conformidade legal e ética.</li>
</ol>"#,
    ),
    // Errors
    ("err_generic", "Erro de conexão."),
    ("err_browser", "Navegador incompatível."),
    ("err_history", "Erro ao ler histórico."),
    ("err_save", "Erro ao salvar."),
    ("err_model_save", "Erro ao salvar o modelo de IA."),
    ("sec_alert", "Não é possível copiar/colar deste campo."),
];
