//! Generated client-side scripts.
//!
//! [`cart_script`] and [`loader_script`] emit the JavaScript that ships
//! in generated pages. The configurable values are injected as `const`
//! declarations (JS-string-escaped); the runtime bodies are fixed and
//! mirror the Rust models in [`crate::cart`] and [`crate::feed`]: the
//! same stripped-prefix price parsing, the same quote-aware row split,
//! the same bypass/clear semantics.

use std::fmt::Write;

use crate::cart::CheckoutParams;

/// Which feed a loader script populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderKind {
    /// Product cards with add-to-cart / Buy Now actions, into `#inv-grid`.
    Inventory,
    /// Post cards with an optional Read More link, into `#blog-grid`.
    Blog,
}

/// Parameters for a generated feed loader.
#[derive(Debug, Clone)]
pub struct LoaderParams {
    pub kind: LoaderKind,
    /// Feed URL fetched at page-load time.
    pub feed_url: String,
    /// Image used when a row's image column is blank.
    pub fallback_image: String,
    /// Currency symbol shown next to prices.
    pub currency: String,
}

/// Quote a value as a JavaScript double-quoted string literal.
///
/// `</` is escaped so a value can never terminate the enclosing
/// `<script>` element.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut previous = '\0';
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '/' if previous == '<' => out.push_str("\\/"),
            c => out.push(c),
        }
        previous = c;
    }
    out.push('"');
    out
}

/// Fixed cart runtime. State lives in localStorage under `titanCart`;
/// the total is recomputed from the sequence on every render.
const CART_RUNTIME: &str = r#"
let cart = JSON.parse(localStorage.getItem('titanCart') || '[]');

function parsePrice(raw) {
  const value = parseFloat(String(raw).replace(/[^0-9.]/g, ''));
  return Number.isNaN(value) ? 0 : value;
}

function renderCart() {
  const cartList = document.getElementById('cart-items');
  const cartCount = document.getElementById('cart-count');
  const cartTotal = document.getElementById('cart-total');
  if (!cartList) return;

  cartList.innerHTML = '';
  let total = 0;

  cart.forEach((item, index) => {
    total += parsePrice(item.price);
    const row = document.createElement('div');
    row.className = 'cart-item';
    const name = document.createElement('span');
    name.textContent = item.name;
    const right = document.createElement('div');
    right.style.cssText = 'display:flex; gap:10px; align-items:center;';
    const price = document.createElement('span');
    price.textContent = currency + item.price;
    const remove = document.createElement('button');
    remove.textContent = '×';
    remove.style.cssText = 'color:red; background:none; border:none; cursor:pointer;';
    remove.addEventListener('click', () => removeFromCart(index));
    right.appendChild(price);
    right.appendChild(remove);
    row.appendChild(name);
    row.appendChild(right);
    cartList.appendChild(row);
  });

  cartCount.innerText = cart.length;
  cartTotal.innerText = currency + total.toFixed(2);
  localStorage.setItem('titanCart', JSON.stringify(cart));

  document.getElementById('cart-float').style.display = cart.length > 0 ? 'flex' : 'none';
}

function addToCart(name, price, directLink) {
  if (directLink && directLink.length > 5) {
    window.location.href = directLink;
    return;
  }
  cart.push({name: name, price: price});
  renderCart();
  alert(name + ' added to cart!');
}

function removeFromCart(index) {
  cart.splice(index, 1);
  renderCart();
}

function toggleCart() {
  const modal = document.getElementById('cart-modal');
  const overlay = document.getElementById('cart-overlay');
  const display = modal.style.display === 'block' ? 'none' : 'block';
  modal.style.display = display;
  overlay.style.display = display;
}

function checkoutWhatsApp() {
  if (cart.length === 0) return;

  let msg = 'Hi, I would like to place an order:\n';
  let total = 0;
  cart.forEach((item) => {
    msg += '- ' + item.name + ' (' + currency + item.price + ')\n';
    total += parsePrice(item.price);
  });
  msg += '\nTotal: ' + currency + total.toFixed(2);
  if (upiId) msg += '\n\nPayment via UPI: ' + upiId;
  if (paypalLink) msg += '\n\nPayment via PayPal: ' + paypalLink;

  window.open('https://wa.me/' + waNumber + '?text=' + encodeURIComponent(msg), '_blank');
  cart = [];
  localStorage.removeItem('titanCart');
  renderCart();
  document.getElementById('cart-modal').style.display = 'none';
  document.getElementById('cart-overlay').style.display = 'none';
}

window.addEventListener('load', renderCart);
"#;

/// Emit the cart/checkout script for a page.
pub fn cart_script(params: &CheckoutParams) -> String {
    let mut js = String::with_capacity(CART_RUNTIME.len() + 256);
    js.push_str("<script>\n");
    let _ = writeln!(js, "const currency = {};", js_string(&params.currency));
    let _ = writeln!(js, "const waNumber = {};", js_string(&params.phone));
    let _ = writeln!(js, "const upiId = {};", js_string(&params.upi_id));
    let _ = writeln!(js, "const paypalLink = {};", js_string(&params.paypal_link));
    js.push_str(CART_RUNTIME);
    js.push_str("</script>");
    js
}

/// Fixed loader runtime shared by both feed kinds. The quote-aware row
/// split matches the canonical Rust parser; fetch or parse failures are
/// logged and leave the placeholder untouched.
const LOADER_RUNTIME: &str = r#"
function parseRow(line) {
  const fields = [];
  let field = '';
  let inQuotes = false;
  for (let i = 0; i < line.length; i++) {
    const c = line[i];
    if (inQuotes) {
      if (c === '"') {
        if (line[i + 1] === '"') { field += '"'; i++; } else { inQuotes = false; }
      } else {
        field += c;
      }
    } else if (c === '"') {
      inQuotes = true;
    } else if (c === ',') {
      fields.push(field.trim());
      field = '';
    } else {
      field += c;
    }
  }
  fields.push(field.trim());
  return fields;
}

async function loadFeed() {
  try {
    const res = await fetch(feedUrl);
    const txt = await res.text();
    const lines = txt.split(/\r\n|\n/);
    const box = document.getElementById(gridId);
    if (!box) return;
    box.innerHTML = '';

    for (let i = 1; i < lines.length; i++) {
      if (!lines[i].trim()) continue;
      const row = parseRow(lines[i]);
      if (row.length < 2) continue;
      box.appendChild(buildCard(row));
    }
  } catch (e) { console.log(e); }
}

function cardImage(src) {
  const img = document.createElement('img');
  img.src = src || fallbackImage;
  img.style.cssText = 'width:100%; height:200px; object-fit:cover; border-radius:8px; margin-bottom:1rem;';
  return img;
}

loadFeed();
"#;

/// Card builder for product rows: price line plus Buy Now / add-to-cart.
const INVENTORY_CARD: &str = r#"
function buildCard(row) {
  const card = document.createElement('div');
  card.className = 'card';
  card.appendChild(cardImage(row[3]));

  const title = document.createElement('h3');
  title.textContent = row[0];
  card.appendChild(title);

  const price = document.createElement('p');
  price.style.cssText = 'color:var(--s); font-weight:bold;';
  price.textContent = currency + row[1];
  card.appendChild(price);

  const desc = document.createElement('p');
  desc.style.cssText = 'font-size:0.9rem; opacity:0.8;';
  desc.textContent = row[2] || '';
  card.appendChild(desc);

  const link = row[4] || '';
  if (link.startsWith('http://') || link.startsWith('https://')) {
    const buy = document.createElement('a');
    buy.href = link;
    buy.className = 'btn';
    buy.style.cssText = 'width:100%; margin-top:1rem; display:block; text-align:center; box-sizing:border-box;';
    buy.textContent = 'Buy Now';
    card.appendChild(buy);
  } else {
    const add = document.createElement('button');
    add.className = 'btn';
    add.style.cssText = 'width:100%; margin-top:1rem;';
    add.textContent = 'Add to Cart';
    add.addEventListener('click', () => addToCart(row[0], row[1], ''));
    card.appendChild(add);
  }
  return card;
}
"#;

/// Card builder for post rows: date line and an optional Read More link.
const BLOG_CARD: &str = r#"
function buildCard(row) {
  const card = document.createElement('div');
  card.className = 'card';
  card.appendChild(cardImage(row[3]));

  const title = document.createElement('h3');
  title.textContent = row[0];
  card.appendChild(title);

  const date = document.createElement('p');
  date.style.cssText = 'font-size:0.8rem; opacity:0.6;';
  date.textContent = row[1];
  card.appendChild(date);

  const excerpt = document.createElement('p');
  excerpt.style.cssText = 'font-size:0.9rem; opacity:0.8;';
  excerpt.textContent = row[2] || '';
  card.appendChild(excerpt);

  const link = row[4] || '';
  if (link.startsWith('http://') || link.startsWith('https://')) {
    const more = document.createElement('a');
    more.href = link;
    more.className = 'btn';
    more.style.cssText = 'margin-top:1rem; display:inline-block;';
    more.textContent = 'Read More';
    card.appendChild(more);
  }
  return card;
}
"#;

/// Emit the feed loader script for a page.
pub fn loader_script(params: &LoaderParams) -> String {
    let (grid_id, card_builder) = match params.kind {
        LoaderKind::Inventory => ("inv-grid", INVENTORY_CARD),
        LoaderKind::Blog => ("blog-grid", BLOG_CARD),
    };

    let mut js = String::with_capacity(LOADER_RUNTIME.len() + card_builder.len() + 256);
    js.push_str("<script>\n");
    let _ = writeln!(js, "const feedUrl = {};", js_string(&params.feed_url));
    let _ = writeln!(js, "const fallbackImage = {};", js_string(&params.fallback_image));
    let _ = writeln!(js, "const gridId = {};", js_string(grid_id));
    if params.kind == LoaderKind::Inventory {
        // The cart script declares `currency` when both are on the page;
        // standalone inventory pages still need it.
        let _ = writeln!(
            js,
            "if (typeof currency === 'undefined') {{ window.currency = {}; }}",
            js_string(&params.currency)
        );
    }
    js.push_str(card_builder);
    js.push_str(LOADER_RUNTIME);
    js.push_str("</script>");
    js
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CheckoutParams {
        CheckoutParams {
            currency: "$".to_owned(),
            phone: "966572562151".to_owned(),
            upi_id: String::new(),
            paypal_link: "https://paypal.me/shop".to_owned(),
        }
    }

    #[test]
    fn test_cart_script_injects_parameters() {
        let js = cart_script(&params());
        assert!(js.contains("const currency = \"$\";"));
        assert!(js.contains("const waNumber = \"966572562151\";"));
        assert!(js.contains("const paypalLink = \"https://paypal.me/shop\";"));
    }

    #[test]
    fn test_cart_script_has_state_machine_pieces() {
        let js = cart_script(&params());
        assert!(js.contains("localStorage.getItem('titanCart')"));
        assert!(js.contains("directLink.length > 5"));
        assert!(js.contains("https://wa.me/"));
        assert!(js.contains("encodeURIComponent"));
        assert!(js.contains("window.addEventListener('load', renderCart)"));
    }

    #[test]
    fn test_js_string_escaping() {
        assert_eq!(js_string(r#"a "b" c"#), r#""a \"b\" c""#);
        assert_eq!(js_string("line\nbreak"), r#""line\nbreak""#);
        // A closing script tag cannot escape the element.
        assert_eq!(js_string("</script>"), r#""<\/script>""#);
    }

    #[test]
    fn test_loader_script_kinds() {
        let inventory = loader_script(&LoaderParams {
            kind: LoaderKind::Inventory,
            feed_url: "https://sheets.example/pub".to_owned(),
            fallback_image: "https://img.example/fallback.png".to_owned(),
            currency: "$".to_owned(),
        });
        assert!(inventory.contains("const gridId = \"inv-grid\";"));
        assert!(inventory.contains("Buy Now"));
        assert!(inventory.contains("addToCart(row[0], row[1], '')"));

        let blog = loader_script(&LoaderParams {
            kind: LoaderKind::Blog,
            feed_url: "https://sheets.example/posts".to_owned(),
            fallback_image: String::new(),
            currency: "$".to_owned(),
        });
        assert!(blog.contains("const gridId = \"blog-grid\";"));
        assert!(blog.contains("Read More"));
        assert!(!blog.contains("addToCart"));
    }

    #[test]
    fn test_loader_swallows_fetch_errors() {
        let js = loader_script(&LoaderParams {
            kind: LoaderKind::Inventory,
            feed_url: String::new(),
            fallback_image: String::new(),
            currency: "$".to_owned(),
        });
        assert!(js.contains("catch (e) { console.log(e); }"));
    }
}
