use log::info;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    info!("Rendering Home page");

    html! {
        <div class="portfolio-page">
            // Hero animates in on mount; it is above the fold by
            // definition, so it gets no scroll-reveal wrapper.
            <div class="hero">
                <div class="hero-content">
                    <h1 class="hero-greeting">{"Hi, my name is"}</h1>
                    <h2 class="hero-name">{config::OWNER_NAME}</h2>
                    <h3 class="hero-tagline">{config::HERO_TAGLINE}</h3>
                    <p class="hero-blurb">{config::HERO_BLURB}</p>
                    <a href="#contact" class="hero-cta">{"Get In Touch"}</a>
                </div>
            </div>

            <Reveal id="about" title="About Me">
                <div class="about-grid">
                    <div class="about-text">
                        {
                            config::ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                                <p>{*paragraph}</p>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="about-photo">
                        <img src={config::PROFILE_IMAGE_URL} alt="Profile" />
                    </div>
                </div>
            </Reveal>

            <Reveal id="projects" title="Featured Projects">
                <div class="project-grid">
                    {
                        config::PROJECTS.iter().map(|project| html! {
                            <div class="card project-card">
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <a
                                    href={project.github}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="project-link"
                                >
                                    {"GitHub ↗"}
                                </a>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </Reveal>

            <Reveal id="skills" title="Skills">
                <div class="skills-grid">
                    {
                        config::SKILLS.iter().map(|skill| html! {
                            <div class="card skill-card">
                                <p>{*skill}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </Reveal>

            <Reveal id="contact" title="Get In Touch">
                <div class="contact-body">
                    <p>{config::CONTACT_BLURB}</p>
                    <div class="contact-links">
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="contact-link">
                            {"Email"}
                        </a>
                        <a
                            href={config::GITHUB_PROFILE_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="contact-link"
                        >
                            {"GitHub"}
                        </a>
                        <a
                            href={config::LINKEDIN_PROFILE_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="contact-link"
                        >
                            {"LinkedIn"}
                        </a>
                    </div>
                </div>
            </Reveal>

            <footer class="page-footer">
                <p>{"Built with Rust & Yew"}</p>
            </footer>

            <style>
                {r#"
:root {
    --navy: #0a192f;
    --light-navy: #112240;
    --green: #64ffda;
    --slate: #8892b0;
    --light-slate: #a8b2d1;
    --lightest-slate: #ccd6f6;
}

.portfolio-page {
    min-height: 100vh;
    background: var(--navy);
    color: var(--slate);
    font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
    line-height: 1.6;
}

/* Scroll-reveal sections: hidden state is transparent and pushed 50px
   down; the .revealed class restores both over 0.6s. */
.reveal-section {
    opacity: 0;
    transform: translateY(50px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    padding: 5rem 1rem;
    max-width: 896px;
    margin: 0 auto;
}

.reveal-section.revealed {
    opacity: 1;
    transform: translateY(0);
}

.section-heading {
    color: var(--lightest-slate);
    font-size: 1.8rem;
    margin-bottom: 2rem;
    position: relative;
    display: inline-block;
}

.section-heading::after {
    content: '';
    position: absolute;
    left: 0;
    bottom: -8px;
    width: 60%;
    height: 2px;
    background: var(--green);
}

/* Hero */

@keyframes heroFadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

.hero {
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 0 1rem;
    animation: heroFadeIn 0.8s ease-out;
}

.hero-content {
    text-align: center;
}

.hero-greeting {
    color: var(--green);
    font-size: 1.25rem;
    margin-bottom: 1rem;
    font-weight: 400;
}

.hero-name {
    color: var(--lightest-slate);
    font-size: 3.5rem;
    margin-bottom: 1rem;
}

.hero-tagline {
    color: var(--slate);
    font-size: 2.5rem;
    margin-bottom: 2rem;
}

.hero-blurb {
    max-width: 36rem;
    margin: 0 auto 2rem;
    font-size: 1.1rem;
}

.hero-cta {
    display: inline-block;
    border: 2px solid var(--green);
    color: var(--green);
    padding: 1rem 2rem;
    border-radius: 4px;
    text-decoration: none;
    transition: background-color 0.3s ease;
}

.hero-cta:hover {
    background-color: rgba(100, 255, 218, 0.1);
}

/* About */

.about-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    align-items: center;
}

.about-text p {
    margin-bottom: 1rem;
}

.about-photo img {
    display: block;
    width: 100%;
    max-width: 24rem;
    margin: 0 auto;
    border-radius: 8px;
}

/* Cards (projects and skills share the base) */

.card {
    background: var(--light-navy);
    border-radius: 8px;
    padding: 1.5rem;
    transition: transform 0.3s ease;
}

.card:hover {
    transform: translateY(-5px);
}

.project-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

.project-card h3 {
    color: var(--lightest-slate);
    font-size: 1.25rem;
    margin-bottom: 0.5rem;
}

.project-card p {
    color: var(--light-slate);
    margin-bottom: 1rem;
}

.project-link {
    color: var(--green);
    text-decoration: none;
    transition: color 0.3s ease;
}

.project-link:hover {
    color: var(--lightest-slate);
}

.skills-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1.5rem;
}

.skill-card {
    text-align: center;
}

.skill-card p {
    color: var(--lightest-slate);
}

/* Contact */

.contact-body {
    text-align: center;
    max-width: 36rem;
    margin: 0 auto;
}

.contact-body > p {
    margin-bottom: 2rem;
}

.contact-links {
    display: flex;
    justify-content: center;
    gap: 1.5rem;
}

.contact-link {
    color: var(--green);
    text-decoration: none;
    transition: color 0.3s ease, transform 0.3s ease;
}

.contact-link:hover {
    color: var(--lightest-slate);
    transform: translateY(-2px);
}

/* Footer */

.page-footer {
    padding: 1.5rem 0;
    text-align: center;
    color: var(--slate);
}

@media (max-width: 768px) {
    .hero-name {
        font-size: 2.5rem;
    }

    .hero-tagline {
        font-size: 1.75rem;
    }

    .about-grid,
    .project-grid {
        grid-template-columns: 1fr;
    }

    .skills-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}
                "#}
            </style>
        </div>
    }
}
