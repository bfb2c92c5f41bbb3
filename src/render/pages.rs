//! Page templates: overview index and per-distribution detail pages.

use chrono::Utc;

use crate::catalog::{Distribution, Package, ScanTables};
use crate::render::{escape, KEYRING_PATH, KEY_FILE, REPO_URL};

const UNSTABLE_WARNING: &str = r#"
                <div class="warning-box">
                    <strong>Unstable Channel:</strong> Contains latest packages from main branch. May include untested changes. Use stable for production systems.
                </div>
"#;

fn html_header(breadcrumb: Option<&str>) -> String {
    let mut out = String::from(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Hat Labs APT Repository</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <div class="container">"#,
    );
    if let Some(breadcrumb) = breadcrumb {
        out.push_str("\n        ");
        out.push_str(breadcrumb);
    }
    out.push_str(
        r#"
        <header>
            <h1>Hat Labs APT Repository</h1>
            <p class="subtitle">Debian packages for Hat Labs products and Halos operating system</p>
        </header>
"#,
    );
    out
}

fn signing_key_box(fingerprint: &str) -> String {
    format!(
        r#"
        <div class="info-box">
            <h3>Repository Signing Key</h3>
            <p>All packages are cryptographically signed for security.</p>
            <p style="margin-top: 10px;">
                Download: <a href="{KEY_FILE}">{KEY_FILE}</a><br>
                Fingerprint: <code>{}</code>
            </p>
        </div>
"#,
        escape(fingerprint)
    )
}

fn footer(back_link: bool) -> String {
    let updated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let middle = if back_link {
        r#"<p><a href="index.html">&larr; Back to all distributions</a></p>"#.to_string()
    } else {
        format!("<p>Repository URL: <code>{}</code></p>", escape(REPO_URL))
    };
    format!(
        r#"
        <footer>
            <p>Last updated: {updated}</p>
            {middle}
            <p>This repository is cryptographically signed for security</p>
        </footer>
    </div>
</body>
</html>
"#
    )
}

fn install_section(dist: &Distribution, tables: &ScanTables) -> String {
    let components = dist.components(tables).join(" ");
    format!(
        r#"
                <details class="install-section">
                    <summary>Add this distribution</summary>
                    <div class="install-content">
                        <div class="command-block">echo "deb [signed-by={}] {} {} {}" | sudo tee -a /etc/apt/sources.list.d/hatlabs.list</div>
                    </div>
                </details>"#,
        escape(KEYRING_PATH),
        escape(REPO_URL),
        escape(&dist.name),
        escape(&components),
    )
}

/// Summary card for the overview page: name, count, description, and a
/// link to the distribution's own page. No per-package detail.
fn distribution_summary_card(dist: &Distribution, tables: &ScanTables) -> String {
    let mut out = String::new();
    let name = escape(&dist.name);
    let count = dist.package_count();

    out.push_str("\n            <div class=\"dist-card\">");
    out.push_str(&format!(
        "\n                <h3><a href=\"{name}.html\">{}</a></h3>",
        escape(&dist.display_name)
    ));
    out.push_str(&format!(
        "\n                <p class=\"dist-meta\">{count} packages</p>"
    ));
    out.push_str(&format!(
        "\n                <p class=\"dist-desc\">{}</p>",
        escape(&dist.description)
    ));
    if dist.name.contains("unstable") {
        out.push_str(UNSTABLE_WARNING);
    }
    out.push_str(&format!(
        "\n                <p style=\"margin-top: 15px;\"><a href=\"{name}.html\">View all {count} packages &rarr;</a></p>"
    ));
    out.push_str(&install_section(dist, tables));
    out.push_str("\n            </div>");
    out
}

fn package_item(pkg: &Package) -> String {
    let badges: Vec<String> = pkg
        .all_architectures
        .iter()
        .map(|arch| format!("<span class=\"arch-badge\">{}</span>", escape(arch)))
        .collect();
    format!(
        r#"
                        <div class="package-item">
                            <h4>{} <span class="version">v{}</span> {}</h4>
                            <p class="description">{}</p>
                            <div class="install-cmd">sudo apt install {}</div>
                        </div>"#,
        escape(&pkg.name),
        escape(&pkg.version),
        badges.join(" "),
        escape(&pkg.description),
        escape(&pkg.name),
    )
}

/// Collapsible per-component group with its package listing.
fn component_group(
    dist: &Distribution,
    component: &str,
    tables: &ScanTables,
    expanded: bool,
) -> String {
    let packages = dist.packages_by_component(component);
    let open_attr = if expanded { " open" } else { "" };
    let mut out = format!(
        "\n                    <details class=\"component-group\"{open_attr}>\
         \n                        <summary>{} <span class=\"pkg-count\">({} packages)</span></summary>\
         \n                        <div class=\"component-content\">",
        escape(&tables.component_display_name(component)),
        packages.len(),
    );
    if packages.is_empty() {
        out.push_str(
            "\n                            <p class=\"empty-msg\">No packages in this component yet.</p>",
        );
    } else {
        for pkg in packages {
            out.push_str(&package_item(pkg));
        }
    }
    out.push_str("\n                        </div>\n                    </details>");
    out
}

/// Full distribution card for detail pages: packages grouped by
/// component, first non-empty group expanded.
fn distribution_card(dist: &Distribution, tables: &ScanTables) -> String {
    let mut out = String::new();
    out.push_str("\n            <div class=\"dist-card\">");
    out.push_str(&format!(
        "\n                <h3>{}</h3>",
        escape(&dist.display_name)
    ));
    out.push_str(&format!(
        "\n                <p class=\"dist-meta\">{} packages</p>",
        dist.package_count()
    ));
    out.push_str(&format!(
        "\n                <p class=\"dist-desc\">{}</p>",
        escape(&dist.description)
    ));
    if dist.name.contains("unstable") {
        out.push_str(UNSTABLE_WARNING);
    }

    out.push_str("\n                <div class=\"package-list\">");
    out.push_str("\n                    <strong>Available Packages:</strong>");
    for (i, component) in dist.components(tables).iter().enumerate() {
        let expanded = dist.component_package_count(component) > 0 || i == 0;
        out.push_str(&component_group(dist, component, tables, expanded));
    }
    out.push_str("\n                </div>");

    out.push_str(&install_section(dist, tables));
    out.push_str("\n            </div>");
    out
}

/// Overview page: setup instructions plus one summary card per
/// distribution, grouped into product and OS sections.
pub fn render_main_index(
    distributions: &[Distribution],
    tables: &ScanTables,
    fingerprint: &str,
) -> String {
    let mut out = html_header(None);

    out.push_str(&format!(
        r#"
        <div class="info-box">
            <h3>Repository Setup</h3>
            <p>Add the Hat Labs repository to your system:</p>
            <div class="command-block">curl -fsSL {url}/{KEY_FILE} | sudo gpg --dearmor -o {keyring}
echo "deb [signed-by={keyring}] {url} &lt;distribution&gt; &lt;components&gt;" | sudo tee -a /etc/apt/sources.list.d/hatlabs.list
sudo apt update</div>
            <p style="margin-top: 10px;"><small>Replace <code>&lt;distribution&gt;</code> with your desired distribution and <code>&lt;components&gt;</code> with available components (e.g., <code>main hatlabs</code>)</small></p>
        </div>
"#,
        url = escape(REPO_URL),
        keyring = escape(KEYRING_PATH),
    ));

    let (product, os): (Vec<&Distribution>, Vec<&Distribution>) =
        distributions.iter().partition(|d| d.is_product());

    if !product.is_empty() {
        out.push_str("\n        <div class=\"dist-section\">");
        out.push_str("\n            <h2>Hat Labs Product Packages</h2>");
        out.push_str("\n            <p class=\"dist-desc\">Firmware and drivers for Hat Labs hardware products (HALPI2, etc.)</p>");
        for dist in product {
            out.push_str(&distribution_summary_card(dist, tables));
        }
        out.push_str("\n        </div>");
    }

    if !os.is_empty() {
        out.push_str("\n        <div class=\"dist-section\">");
        out.push_str("\n            <h2>Halos Operating System Packages</h2>");
        out.push_str("\n            <p class=\"dist-desc\">Halos-specific packages for different Debian/Raspberry Pi OS releases</p>");
        for dist in os {
            out.push_str(&distribution_summary_card(dist, tables));
        }
        out.push_str("\n        </div>");
    }

    out.push_str(&signing_key_box(fingerprint));
    out.push_str(&footer(false));
    out
}

/// Detail page for one distribution, with a breadcrumb back to the
/// overview and the full package listing.
pub fn render_distribution_page(
    dist: &Distribution,
    tables: &ScanTables,
    fingerprint: &str,
) -> String {
    let breadcrumb =
        r#"<div class="breadcrumb"><a href="index.html">&larr; Back to all distributions</a></div>"#;
    let mut out = html_header(Some(breadcrumb));

    out.push_str("\n        <div class=\"dist-section\">");
    out.push_str(&distribution_card(dist, tables));
    out.push_str("\n        </div>");

    out.push_str(&signing_key_box(fingerprint));
    out.push_str(&footer(true));
    out
}
