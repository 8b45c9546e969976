/// Inline stylesheet for an 800x480 monochrome panel
pub const STYLESHEET: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }

    body {
      font-family: 'Courier New', monospace;
      background: #ffffff;
      color: #000000;
      width: 800px;
      height: 480px;
      overflow: hidden;
      padding: 10px;
    }

    .header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding-bottom: 6px;
      border-bottom: 2px solid #000;
      margin-bottom: 6px;
    }
    .date { font-size: 16px; font-weight: bold; }
    .weather { font-size: 14px; font-weight: bold; }

    .timezone-row {
      display: flex;
      justify-content: space-around;
      padding: 6px 0;
      border-bottom: 2px solid #000;
      margin-bottom: 6px;
    }
    .tz { text-align: center; font-size: 13px; }
    .tz-label { font-weight: bold; font-size: 11px; opacity: 0.7; }
    .tz-time { font-weight: bold; font-size: 15px; }
    .tz-primary { border: 2px solid #000; padding: 2px 8px; background: #000; color: #fff; }

    .progress-section {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
      padding: 8px 0;
      border-bottom: 2px solid #000;
      margin-bottom: 8px;
    }
    .section-label { font-size: 14px; font-weight: bold; min-width: 130px; }
    .time-labels { font-size: 11px; font-weight: bold; }
    .progress-bar { display: flex; gap: 4px; }
    .progress-box { width: 26px; height: 16px; border: 2px solid #000; }
    .progress-box.filled { background: #000; }
    .progress-box.empty { background: #fff; }

    .columns { display: flex; height: 300px; }
    .column { flex: 1; padding: 0 8px; border-right: 2px solid #000; overflow: hidden; }
    .column:last-child { border-right: none; }
    .column-header {
      font-size: 18px;
      font-weight: bold;
      text-align: center;
      padding-bottom: 6px;
      margin-bottom: 8px;
      border-bottom: 1px solid #000;
    }

    .task { display: flex; align-items: flex-start; gap: 5px; padding: 3px 0; font-size: 12px; }
    .checkbox { font-size: 14px; line-height: 1; }
    .task-text { line-height: 1.3; }
    .task-text.done { text-decoration: line-through; opacity: 0.6; }
    .subtask { padding-left: 15px; font-size: 11px; }
    .subtask .checkbox { font-size: 12px; }

    .updated { position: absolute; bottom: 3px; right: 8px; font-size: 9px; opacity: 0.5; }
"#;
