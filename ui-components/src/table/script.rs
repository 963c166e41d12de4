//! Per-instance table behavior script

use super::config::TableConfig;
use crate::markup::script_json;

/// Behavior script for the table rendered under `id`. Every lookup is scoped
/// to that element, so several tables can share a page.
pub(crate) fn behavior_script(id: &str, config: &TableConfig) -> String {
    format!(
        r#"<script>
  (function () {{
    var root = document.getElementById({id});
    if (!root) {{ return; }}
    var perPage = {per_page};
    var paginate = {paginate};
    var body = root.querySelector('[data-table-body]');
    var search = root.querySelector('[data-table-search]');
    var strip = root.querySelector('[data-table-pages]');
    var headers = Array.prototype.slice.call(root.querySelectorAll('th[data-sortable]'));
    var rows = Array.prototype.slice.call(body.rows).filter(function (row) {{
      return !row.hasAttribute('data-table-empty');
    }});
    var state = {{ query: '', column: -1, direction: 'ascending', page: 1 }};

    headers.forEach(function (header) {{
      var initial = header.getAttribute('aria-sort');
      if (initial === 'ascending' || initial === 'descending') {{
        state.column = header.cellIndex;
        state.direction = initial;
      }}
    }});

    function cellText(row, index) {{
      var cell = row.cells[index];
      return cell ? cell.textContent.trim() : '';
    }}

    function searchText(row) {{
      return Array.prototype.filter.call(row.cells, function (cell) {{
        return !cell.hasAttribute('data-table-actions');
      }}).map(function (cell) {{
        return cell.textContent.trim();
      }}).join(' ').toLowerCase();
    }}

    function ordered() {{
      var query = state.query.toLowerCase();
      var matching = rows.filter(function (row) {{
        return searchText(row).indexOf(query) !== -1;
      }});
      if (state.column >= 0) {{
        var sign = state.direction === 'descending' ? -1 : 1;
        matching.sort(function (a, b) {{
          return sign * cellText(a, state.column).localeCompare(cellText(b, state.column), undefined, {{ numeric: true, sensitivity: 'base' }});
        }});
      }}
      return matching;
    }}

    function setText(name, value) {{
      var el = root.querySelector('[data-table-' + name + ']');
      if (el) {{ el.textContent = String(value); }}
    }}

    function pageButton(label, page, active, disabled) {{
      var button = document.createElement('button');
      button.type = 'button';
      button.className = 'join-item btn btn-sm' + (active ? ' btn-active' : '');
      button.textContent = label;
      button.disabled = disabled;
      button.addEventListener('click', function () {{
        state.page = page;
        update();
      }});
      return button;
    }}

    function renderStrip(pages) {{
      if (!strip) {{ return; }}
      while (strip.firstChild) {{ strip.removeChild(strip.firstChild); }}
      strip.hidden = pages === 0;
      if (pages === 0) {{ return; }}
      strip.appendChild(pageButton('«', state.page - 1, false, state.page <= 1));
      for (var n = 1; n <= pages; n++) {{
        var button = pageButton(String(n), n, n === state.page, false);
        button.dataset.page = String(n);
        strip.appendChild(button);
      }}
      strip.appendChild(pageButton('»', state.page + 1, false, state.page >= pages));
    }}

    function update() {{
      var matching = ordered();
      matching.forEach(function (row) {{ body.appendChild(row); }});
      rows.forEach(function (row) {{ row.hidden = true; }});
      var total = matching.length;
      var pages = paginate ? Math.ceil(total / perPage) : (total > 0 ? 1 : 0);
      state.page = Math.min(Math.max(state.page, 1), Math.max(pages, 1));
      var start = paginate ? (state.page - 1) * perPage : 0;
      var end = paginate ? Math.min(start + perPage, total) : total;
      matching.slice(start, end).forEach(function (row) {{ row.hidden = false; }});
      setText('start', total === 0 ? 0 : start + 1);
      setText('end', end);
      setText('total', total);
      if (paginate) {{ renderStrip(pages); }}
    }}

    if (search) {{
      search.addEventListener('input', function () {{
        state.query = search.value;
        state.page = 1;
        update();
      }});
    }}

    headers.forEach(function (header) {{
      header.addEventListener('click', function () {{
        var index = header.cellIndex;
        var next = state.column === index && state.direction === 'ascending' ? 'descending' : 'ascending';
        headers.forEach(function (other) {{
          other.removeAttribute('aria-sort');
          other.classList.remove('sort-asc', 'sort-desc');
        }});
        header.setAttribute('aria-sort', next);
        header.classList.add(next === 'ascending' ? 'sort-asc' : 'sort-desc');
        state.column = index;
        state.direction = next;
        state.page = 1;
        update();
      }});
    }});

    update();
  }})();
</script>
"#,
        id = script_json(id),
        per_page = config.rows_per_page,
        paginate = config.features.pagination,
    )
}
