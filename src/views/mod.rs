use actix_web::HttpResponse;
use serde::Serialize;
use tera::{Context, Tera};

use crate::database::models::comment::Comment;
use crate::database::models::post::Post;
use crate::database::models::user::User;
use crate::forms::{CommentForm, CreatePostForm, FieldErrors, LoginForm, RegisterForm};

/// What the templates get to see of a user. The email and the password
/// hash stay out of the rendering context.
#[derive(Serialize)]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub is_admin: bool,
}

#[derive(Serialize)]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
    pub date: String,
    pub author_name: String,
}

#[derive(Serialize)]
pub struct CommentView {
    pub body: String,
    pub author_name: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        UserView {
            id: user.id,
            name: user.name.clone(),
            is_admin: user.is_admin,
        }
    }
}

impl From<(Post, User)> for PostView {
    fn from((post, author): (Post, User)) -> Self {
        PostView {
            id: post.id,
            title: post.title,
            subtitle: post.subtitle,
            body: post.body,
            img_url: post.img_url,
            date: post.date,
            author_name: author.name,
        }
    }
}

impl From<(Comment, User)> for CommentView {
    fn from((comment, author): (Comment, User)) -> Self {
        CommentView {
            body: comment.body,
            author_name: author.name,
        }
    }
}

/// Renders the site pages from built-in templates registered once at
/// startup.
#[derive(Clone)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Renderer, tera::Error> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", BASE_TEMPLATE)?;
        tera.add_raw_template("index.html", INDEX_TEMPLATE)?;
        tera.add_raw_template("post.html", POST_TEMPLATE)?;
        tera.add_raw_template("register.html", REGISTER_TEMPLATE)?;
        tera.add_raw_template("login.html", LOGIN_TEMPLATE)?;
        tera.add_raw_template("make-post.html", MAKE_POST_TEMPLATE)?;
        tera.add_raw_template("about.html", ABOUT_TEMPLATE)?;
        tera.add_raw_template("contact.html", CONTACT_TEMPLATE)?;

        Ok(Renderer { tera })
    }

    fn chrome(viewer: Option<&User>, flash: Option<String>) -> Context {
        let mut ctx = Context::new();
        ctx.insert("user", &viewer.map(UserView::from));
        ctx.insert("flash", &flash);
        ctx
    }

    pub fn index(
        &self,
        posts: Vec<(Post, User)>,
        viewer: Option<&User>,
        flash: Option<String>,
    ) -> Result<String, tera::Error> {
        let mut ctx = Self::chrome(viewer, flash);
        let posts: Vec<PostView> = posts.into_iter().map(PostView::from).collect();
        ctx.insert("posts", &posts);

        self.tera.render("index.html", &ctx)
    }

    pub fn post_page(
        &self,
        post: (Post, User),
        comments: Vec<(Comment, User)>,
        form: &CommentForm,
        errors: &FieldErrors,
        viewer: Option<&User>,
        flash: Option<String>,
    ) -> Result<String, tera::Error> {
        let mut ctx = Self::chrome(viewer, flash);
        let comments: Vec<CommentView> = comments.into_iter().map(CommentView::from).collect();
        ctx.insert("post", &PostView::from(post));
        ctx.insert("comments", &comments);
        ctx.insert("form", form);
        ctx.insert("errors", errors);

        self.tera.render("post.html", &ctx)
    }

    pub fn register_page(
        &self,
        form: &RegisterForm,
        errors: &FieldErrors,
        viewer: Option<&User>,
        flash: Option<String>,
    ) -> Result<String, tera::Error> {
        let mut ctx = Self::chrome(viewer, flash);
        ctx.insert("form", form);
        ctx.insert("errors", errors);

        self.tera.render("register.html", &ctx)
    }

    pub fn login_page(
        &self,
        form: &LoginForm,
        errors: &FieldErrors,
        viewer: Option<&User>,
        flash: Option<String>,
    ) -> Result<String, tera::Error> {
        let mut ctx = Self::chrome(viewer, flash);
        ctx.insert("form", form);
        ctx.insert("errors", errors);

        self.tera.render("login.html", &ctx)
    }

    /// Shared by the new-post and edit-post views; `action` decides where
    /// the form posts back to.
    pub fn post_form(
        &self,
        heading: &str,
        action: &str,
        form: &CreatePostForm,
        errors: &FieldErrors,
        viewer: Option<&User>,
        flash: Option<String>,
    ) -> Result<String, tera::Error> {
        let mut ctx = Self::chrome(viewer, flash);
        ctx.insert("heading", heading);
        ctx.insert("action", action);
        ctx.insert("form", form);
        ctx.insert("errors", errors);

        self.tera.render("make-post.html", &ctx)
    }

    pub fn about(&self, viewer: Option<&User>, flash: Option<String>) -> Result<String, tera::Error> {
        self.tera.render("about.html", &Self::chrome(viewer, flash))
    }

    pub fn contact(
        &self,
        viewer: Option<&User>,
        flash: Option<String>,
    ) -> Result<String, tera::Error> {
        self.tera.render("contact.html", &Self::chrome(viewer, flash))
    }
}

/// Wraps a rendered page into an HTML response.
pub fn html(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

const BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{% block title %}Inkpost{% endblock title %}</title>
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/about">About</a>
    <a href="/contact">Contact</a>
    {% if user %}
      {% if user.is_admin %}<a href="/new-post">New Post</a>{% endif %}
      <a href="/logout">Log Out</a>
    {% else %}
      <a href="/login">Log In</a>
      <a href="/register">Register</a>
    {% endif %}
  </nav>
  {% if flash %}<p class="flash">{{ flash }}</p>{% endif %}
  <main>
    {% block content %}{% endblock content %}
  </main>
</body>
</html>
"#;

const INDEX_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block content %}
<h1>All Posts</h1>
{% for post in posts %}
<article>
  <h2><a href="/post/{{ post.id }}">{{ post.title }}</a></h2>
  <h3>{{ post.subtitle }}</h3>
  <p>Posted by {{ post.author_name }} on {{ post.date }}</p>
  {% if user %}{% if user.is_admin %}
  <p><a href="/edit-post/{{ post.id }}">Edit</a> <a href="/delete/{{ post.id }}">Delete</a></p>
  {% endif %}{% endif %}
</article>
{% endfor %}
{% endblock content %}
"#;

const POST_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}{{ post.title }}{% endblock title %}
{% block content %}
<article>
  <h1>{{ post.title }}</h1>
  <h2>{{ post.subtitle }}</h2>
  <p>Posted by {{ post.author_name }} on {{ post.date }}</p>
  <img src="{{ post.img_url }}" alt="{{ post.title }}">
  <div>{{ post.body | safe }}</div>
</article>
<section>
  <h2>Comments</h2>
  {% for comment in comments %}
  <div class="comment">
    <p>{{ comment.author_name }}</p>
    <div>{{ comment.body | safe }}</div>
  </div>
  {% endfor %}
  <form method="post" action="/post/{{ post.id }}">
    <label for="body">Comment</label>
    {% for message in errors.body %}<p class="error">{{ message }}</p>{% endfor %}
    <textarea id="body" name="body">{{ form.body }}</textarea>
    <button type="submit">Submit Comment</button>
  </form>
</section>
{% endblock content %}
"#;

const REGISTER_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}Register{% endblock title %}
{% block content %}
<h1>Register</h1>
<form method="post" action="/register">
  <label for="email">Email</label>
  {% for message in errors.email %}<p class="error">{{ message }}</p>{% endfor %}
  <input id="email" name="email" type="email" value="{{ form.email }}">
  <label for="password">Password</label>
  {% for message in errors.password %}<p class="error">{{ message }}</p>{% endfor %}
  <input id="password" name="password" type="password">
  <label for="name">Name</label>
  {% for message in errors.name %}<p class="error">{{ message }}</p>{% endfor %}
  <input id="name" name="name" type="text" value="{{ form.name }}">
  <button type="submit">Sign Me Up</button>
</form>
{% endblock content %}
"#;

const LOGIN_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}Log In{% endblock title %}
{% block content %}
<h1>Log In</h1>
<form method="post" action="/login">
  <label for="email">Email</label>
  {% for message in errors.email %}<p class="error">{{ message }}</p>{% endfor %}
  <input id="email" name="email" type="email" value="{{ form.email }}">
  <label for="password">Password</label>
  {% for message in errors.password %}<p class="error">{{ message }}</p>{% endfor %}
  <input id="password" name="password" type="password">
  <button type="submit">Let Me In</button>
</form>
{% endblock content %}
"#;

const MAKE_POST_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}{{ heading }}{% endblock title %}
{% block content %}
<h1>{{ heading }}</h1>
<form method="post" action="{{ action }}">
  <label for="title">Title</label>
  {% for message in errors.title %}<p class="error">{{ message }}</p>{% endfor %}
  <input id="title" name="title" type="text" value="{{ form.title }}">
  <label for="subtitle">Subtitle</label>
  {% for message in errors.subtitle %}<p class="error">{{ message }}</p>{% endfor %}
  <input id="subtitle" name="subtitle" type="text" value="{{ form.subtitle }}">
  <label for="img_url">Image URL</label>
  {% for message in errors.img_url %}<p class="error">{{ message }}</p>{% endfor %}
  <input id="img_url" name="img_url" type="text" value="{{ form.img_url }}">
  <label for="body">Content</label>
  {% for message in errors.body %}<p class="error">{{ message }}</p>{% endfor %}
  <textarea id="body" name="body">{{ form.body }}</textarea>
  <button type="submit">Submit Post</button>
</form>
{% endblock content %}
"#;

const ABOUT_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}About{% endblock title %}
{% block content %}
<h1>About</h1>
<p>A small blog where registered readers can join the conversation.</p>
{% endblock content %}
"#;

const CONTACT_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block title %}Contact{% endblock title %}
{% block content %}
<h1>Contact</h1>
<p>Questions or feedback? Write to the address in the site footer.</p>
{% endblock content %}
"#;
