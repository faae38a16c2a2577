use crate::models::Theme;

pub fn render_index(date: &str, theme: Theme, streak: u32) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{THEME}}", theme.as_str())
        .replace("{{STREAK}}", &streak.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Tasks</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f6f4ee;
      --bg-2: #dce8e4;
      --ink: #26302e;
      --muted: #6c7a76;
      --accent: #2f8f6b;
      --accent-2: #31475a;
      --danger: #c24a38;
      --card: rgba(255, 255, 255, 0.9);
      --line: rgba(49, 71, 90, 0.12);
      --shadow: 0 22px 54px rgba(49, 71, 90, 0.16);
    }

    [data-theme='dark'] {
      --bg-1: #171c1b;
      --bg-2: #1f2a33;
      --ink: #e8ece9;
      --muted: #93a09b;
      --accent: #4cc195;
      --accent-2: #9dbcd4;
      --danger: #e07a63;
      --card: rgba(30, 36, 35, 0.92);
      --line: rgba(157, 188, 212, 0.16);
      --shadow: 0 22px 54px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, var(--bg-2), transparent 55%),
        linear-gradient(160deg, var(--bg-1), var(--bg-2) 140%);
      color: var(--ink);
      font-family: 'Space Grotesk', 'Trebuchet MS', sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
      transition: background 300ms ease, color 300ms ease;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 26px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: 'Fraunces', 'Georgia', serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .streak {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      background: var(--accent);
      color: white;
      border-radius: 999px;
      padding: 8px 16px;
      font-weight: 600;
      white-space: nowrap;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: var(--line);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: var(--card);
      color: var(--accent-2);
      box-shadow: 0 6px 14px rgba(0, 0, 0, 0.08);
    }

    .date-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: var(--line);
      border-radius: 18px;
      padding: 10px 14px;
    }

    .date-nav .label {
      display: grid;
      justify-items: center;
      gap: 2px;
    }

    .date-nav .label strong {
      font-size: 1.1rem;
      letter-spacing: 0.04em;
    }

    .date-nav .label small {
      color: var(--muted);
    }

    .nav-btn {
      border: none;
      background: var(--card);
      color: var(--accent-2);
      border-radius: 12px;
      width: 42px;
      height: 42px;
      font-size: 1.2rem;
      font-weight: 600;
      cursor: pointer;
    }

    .today-btn {
      border: none;
      background: transparent;
      color: var(--accent);
      font-weight: 600;
      cursor: pointer;
      font-size: 0.85rem;
    }

    form.add {
      display: flex;
      gap: 10px;
    }

    form.add input {
      flex: 1;
      border: 1px solid var(--line);
      background: transparent;
      color: var(--ink);
      border-radius: 14px;
      padding: 12px 16px;
      font-size: 1rem;
      font-family: inherit;
    }

    form.add input:focus {
      outline: 2px solid var(--accent);
      outline-offset: 1px;
    }

    button.primary {
      border: none;
      border-radius: 14px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      font-size: 1rem;
      padding: 12px 22px;
      cursor: pointer;
    }

    button:active {
      transform: scale(0.98);
    }

    ul.tree,
    ul.tree ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    ul.tree ul {
      margin-top: 6px;
      padding-left: 26px;
      border-left: 2px solid var(--line);
    }

    li.task > .row {
      display: flex;
      align-items: center;
      gap: 10px;
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 10px 12px;
    }

    li.task input[type='checkbox'] {
      width: 18px;
      height: 18px;
      accent-color: var(--accent);
      cursor: pointer;
    }

    li.task .text {
      flex: 1;
      word-break: break-word;
    }

    li.task.done > .row .text {
      text-decoration: line-through;
      color: var(--muted);
    }

    .icon-btn {
      border: none;
      background: transparent;
      color: var(--muted);
      font-size: 0.95rem;
      cursor: pointer;
      padding: 4px 6px;
      border-radius: 8px;
    }

    .icon-btn:hover {
      color: var(--accent-2);
      background: var(--line);
    }

    .icon-btn.delete:hover {
      color: var(--danger);
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 24px 0;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 14px;
    }

    .stat {
      background: var(--card);
      border-radius: 16px;
      padding: 14px 16px;
      border: 1px solid var(--line);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.stars {
      color: var(--accent);
      letter-spacing: 0.1em;
    }

    .settings {
      display: grid;
      gap: 20px;
    }

    .settings h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    .theme-row {
      display: flex;
      gap: 10px;
    }

    .theme-btn {
      border: 1px solid var(--line);
      background: transparent;
      color: var(--ink);
      border-radius: 12px;
      padding: 10px 18px;
      font-weight: 600;
      cursor: pointer;
    }

    .theme-btn.active {
      border-color: var(--accent);
      color: var(--accent);
    }

    button.wipe {
      border: 1px solid var(--danger);
      background: transparent;
      color: var(--danger);
      border-radius: 12px;
      padding: 10px 18px;
      font-weight: 600;
      cursor: pointer;
      width: fit-content;
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type='error'] {
      color: var(--danger);
    }

    .status[data-type='ok'] {
      color: var(--accent);
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .hidden {
      display: none;
    }

    @media (max-width: 520px) {
      .app {
        padding: 24px 18px;
      }
      form.add {
        flex-direction: column;
      }
    }
  </style>
</head>
<body data-theme="{{THEME}}">
  <main class="app">
    <header>
      <div>
        <h1>Daily Tasks</h1>
        <p class="subtitle">One list per day. Finish everything to keep the streak alive.</p>
      </div>
      <span class="streak">🔥 <span id="streak">{{STREAK}}</span> day streak</span>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="tasks" role="tab" aria-selected="true">Tasks</button>
      <button class="tab" type="button" data-tab="settings" role="tab" aria-selected="false">Settings</button>
    </div>

    <section id="tasks-view">
      <div class="date-nav">
        <button class="nav-btn" id="prev-day" type="button" aria-label="Previous day">‹</button>
        <div class="label">
          <strong id="date">{{DATE}}</strong>
          <small id="date-note"></small>
          <button class="today-btn hidden" id="jump-today" type="button">Back to today</button>
        </div>
        <button class="nav-btn" id="next-day" type="button" aria-label="Next day">›</button>
      </div>

      <form class="add" id="add-form" autocomplete="off">
        <input id="new-task" name="text" placeholder="Add a task for this day" maxlength="200" />
        <button class="primary" type="submit">Add</button>
      </form>

      <ul class="tree" id="tree"></ul>
      <div class="empty hidden" id="empty-note">Nothing planned for this day yet.</div>

      <div class="panel">
        <div class="stat">
          <span class="label">Tasks</span>
          <span class="value" id="stat-total">0</span>
        </div>
        <div class="stat">
          <span class="label">Done</span>
          <span class="value" id="stat-completed">0</span>
        </div>
        <div class="stat">
          <span class="label">Progress</span>
          <span class="value" id="stat-percentage">0%</span>
        </div>
        <div class="stat">
          <span class="label">Rating</span>
          <span class="value stars" id="stat-stars">☆☆☆☆☆</span>
        </div>
      </div>
    </section>

    <section id="settings-view" class="settings hidden">
      <div>
        <h2>Theme</h2>
        <div class="theme-row">
          <button class="theme-btn" type="button" data-theme-choice="light">Light</button>
          <button class="theme-btn" type="button" data-theme-choice="dark">Dark</button>
        </div>
      </div>
      <div>
        <h2>Data</h2>
        <button class="wipe" id="wipe-btn" type="button">Wipe all data</button>
        <p class="hint">Removes every day and its tasks. The theme choice is kept.</p>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Days are keyed by calendar date (server time). The streak counts consecutive fully completed days ending today.</p>
  </main>

  <script>
    const dateEl = document.getElementById('date');
    const dateNoteEl = document.getElementById('date-note');
    const jumpTodayBtn = document.getElementById('jump-today');
    const treeEl = document.getElementById('tree');
    const emptyNoteEl = document.getElementById('empty-note');
    const streakEl = document.getElementById('streak');
    const statusEl = document.getElementById('status');
    const statTotal = document.getElementById('stat-total');
    const statCompleted = document.getElementById('stat-completed');
    const statPercentage = document.getElementById('stat-percentage');
    const statStars = document.getElementById('stat-stars');
    const addForm = document.getElementById('add-form');
    const newTaskInput = document.getElementById('new-task');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const views = {
      tasks: document.getElementById('tasks-view'),
      settings: document.getElementById('settings-view')
    };
    const themeButtons = Array.from(document.querySelectorAll('.theme-btn'));

    const state = { date: '{{DATE}}' };

    const pad = (value) => String(value).padStart(2, '0');

    const keyFromDate = (date) =>
      `${date.getFullYear()}-${pad(date.getMonth() + 1)}-${pad(date.getDate())}`;

    const dateFromKey = (key) => {
      const [year, month, day] = key.split('-').map(Number);
      return new Date(year, month - 1, day);
    };

    const todayKey = () => keyFromDate(new Date());

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const renderStats = (stats) => {
      statTotal.textContent = stats.total;
      statCompleted.textContent = stats.completed;
      statPercentage.textContent = `${stats.percentage}%`;
      statStars.textContent = '★'.repeat(stats.stars) + '☆'.repeat(5 - stats.stars);
    };

    const taskItem = (task) => {
      const li = document.createElement('li');
      li.className = task.done ? 'task done' : 'task';

      const row = document.createElement('div');
      row.className = 'row';

      const checkbox = document.createElement('input');
      checkbox.type = 'checkbox';
      checkbox.checked = task.done;
      checkbox.addEventListener('change', () => {
        mutate('/api/tasks/toggle', { date: state.date, id: task.id });
      });

      const text = document.createElement('span');
      text.className = 'text';
      text.textContent = task.text;

      const subBtn = document.createElement('button');
      subBtn.type = 'button';
      subBtn.className = 'icon-btn';
      subBtn.title = 'Add subtask';
      subBtn.textContent = '+ sub';
      subBtn.addEventListener('click', () => {
        const input = window.prompt('Subtask');
        if (input === null) {
          return;
        }
        mutate('/api/tasks/subtask', { date: state.date, parent_id: task.id, text: input });
      });

      const deleteBtn = document.createElement('button');
      deleteBtn.type = 'button';
      deleteBtn.className = 'icon-btn delete';
      deleteBtn.title = 'Delete task and subtasks';
      deleteBtn.textContent = '✕';
      deleteBtn.addEventListener('click', () => {
        mutate('/api/tasks/delete', { date: state.date, id: task.id });
      });

      row.append(checkbox, text, subBtn, deleteBtn);
      li.append(row);

      if (task.children.length > 0) {
        const childList = document.createElement('ul');
        task.children.forEach((child) => childList.append(taskItem(child)));
        li.append(childList);
      }

      return li;
    };

    const renderDay = (day) => {
      state.date = day.date;
      dateEl.textContent = day.date;

      const isToday = day.date === todayKey();
      const weekday = dateFromKey(day.date).toLocaleDateString(undefined, { weekday: 'long' });
      dateNoteEl.textContent = isToday ? `today · ${weekday}` : weekday;
      jumpTodayBtn.classList.toggle('hidden', isToday);

      treeEl.replaceChildren(...day.tasks.map(taskItem));
      emptyNoteEl.classList.toggle('hidden', day.tasks.length > 0);
      renderStats(day.stats);
    };

    const refreshStreak = async () => {
      const res = await fetch('/api/streak');
      if (res.ok) {
        streakEl.textContent = (await res.json()).days;
      }
    };

    const loadDay = async () => {
      const res = await fetch(`/api/day?date=${encodeURIComponent(state.date)}`);
      if (!res.ok) {
        throw new Error('Unable to load day');
      }
      renderDay(await res.json());
    };

    const mutate = (path, body) => {
      post(path, body)
        .then((day) => {
          renderDay(day);
          return refreshStreak();
        })
        .catch((err) => setStatus(err.message, 'error'));
    };

    const shiftDate = (deltaDays) => {
      const date = dateFromKey(state.date);
      date.setDate(date.getDate() + deltaDays);
      state.date = keyFromDate(date);
      loadDay().catch((err) => setStatus(err.message, 'error'));
    };

    const markThemeButtons = (theme) => {
      themeButtons.forEach((button) => {
        button.classList.toggle('active', button.dataset.themeChoice === theme);
      });
    };

    const setTheme = (theme) => {
      post('/api/theme', { theme })
        .then((res) => {
          document.body.dataset.theme = res.theme;
          markThemeButtons(res.theme);
        })
        .catch((err) => setStatus(err.message, 'error'));
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      views.tasks.classList.toggle('hidden', tab !== 'tasks');
      views.settings.classList.toggle('hidden', tab !== 'settings');
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    themeButtons.forEach((button) => {
      button.addEventListener('click', () => setTheme(button.dataset.themeChoice));
    });

    document.getElementById('prev-day').addEventListener('click', () => shiftDate(-1));
    document.getElementById('next-day').addEventListener('click', () => shiftDate(1));
    jumpTodayBtn.addEventListener('click', () => {
      state.date = todayKey();
      loadDay().catch((err) => setStatus(err.message, 'error'));
    });

    addForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const text = newTaskInput.value;
      newTaskInput.value = '';
      mutate('/api/tasks', { date: state.date, text });
      newTaskInput.focus();
    });

    document.getElementById('wipe-btn').addEventListener('click', () => {
      if (!window.confirm('Really delete every day and task?')) {
        return;
      }
      post('/api/wipe')
        .then(() => {
          state.date = todayKey();
          setStatus('All data wiped', 'ok');
          setTimeout(() => setStatus('', ''), 1500);
          return Promise.all([loadDay(), refreshStreak()]);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    markThemeButtons(document.body.dataset.theme);
    Promise.all([loadDay(), refreshStreak()]).catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
